mod globals;
pub use globals::*;

mod agent;
pub use agent::{Agent, Ai, Human, Prompt};

mod auction;
pub use auction::{run_auction, validate_bid, AuctionResult};

mod dice;
pub use dice::{Dice, LoadedDice, RandomDice, RandomEvent};

mod error;
pub use error::{LedgerError, SaveError, SettingsError};

mod ledger;
pub use ledger::Ledger;

mod outcome;
pub use outcome::{Event, Observer, PostMoveAction, Resolution, Silent, TurnOutcome};

mod rent;
pub use rent::rent_due;

pub mod save;
pub use save::Snapshot;

mod settings;
pub use settings::Settings;

mod stats;
pub use stats::Statistics;

mod track;
pub use track::Track;

use std::fmt;

/// A simulation of Monopoly.
///
/// The game owns the whole ledger and hands it to one turn at a time, so
/// nothing else can change balances or ownership while a turn is resolving.
pub struct Game {
    /// The rules the game is played by.
    settings: Settings,
    /// The board.
    track: Track,
    /// Every player's account and who owns which property.
    ledger: Ledger,
    /// The agents making decisions for the players, indexed by `PlayerId`.
    agents: Vec<Box<dyn Agent>>,
    /// Everything left to chance.
    dice: Box<dyn Dice>,
    /// Whoever is watching the game.
    observer: Box<dyn Observer>,
    /// Running totals.
    stats: Statistics,
    /// Whether a player has asked for the game to end.
    over: bool,
    /// The index of the player to consider first when picking whose turn is next.
    cursor: usize,
}

impl Game {
    /*********        PUBLIC INTERFACES        *********/

    /// Return a new game where each of `seats` is a player's name and agent,
    /// in turn order.
    pub fn new(settings: Settings, seats: Vec<(String, Box<dyn Agent>)>, dice: Box<dyn Dice>) -> Self {
        let mut players = Vec::with_capacity(seats.len());
        let mut agents = Vec::with_capacity(seats.len());

        for (name, agent) in seats {
            players.push(Player::new(&name, settings.starting_money, agent.is_ai()));
            agents.push(agent);
        }

        let game = Self::from_parts(settings, Ledger::new(players), agents, dice);
        game.audit(format_args!(
            "Board initialized with {} properties and {} players.",
            game.track.properties().len(),
            game.ledger.accounts().len()
        ));
        game
    }

    /// Pick a saved game back up. `agents` must line up with the saved players.
    pub fn restore(
        settings: Settings,
        snapshot: Snapshot,
        agents: Vec<Box<dyn Agent>>,
        dice: Box<dyn Dice>,
    ) -> Result<Self, SaveError> {
        if snapshot.players.len() != agents.len() {
            return Err(SaveError::Corrupted(format!(
                "save has {} players but {} agents were provided",
                snapshot.players.len(),
                agents.len()
            )));
        }

        let track = Track::new(&settings);
        let ledger = snapshot.restore(&track)?;
        Ok(Self::from_parts(settings, ledger, agents, dice))
    }

    /// Report game events to `observer` from now on.
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    /// Take turns until the turn limit is reached, nobody is left in the
    /// game, or a player ends the game. Return the game's statistics.
    pub fn play(&mut self) -> Statistics {
        let mut turns = 0;

        while turns < self.settings.turn_limit && !self.over {
            let player = match self.next_player() {
                Some(player) => player,
                None => break,
            };

            self.run_turn(player);
            turns += 1;
        }

        self.observer.notify(&Event::GameOver { stats: self.stats });
        self.audit(format_args!("Game over after {} turns.", turns));

        self.stats
    }

    /// Play one turn for `player` and return what happened.
    /// Players who are out of the game don't get a turn.
    pub fn run_turn(&mut self, player: PlayerId) -> TurnOutcome {
        match self.ledger.account(player) {
            Some(account) if !account.eliminated => {}
            Some(account) => return TurnOutcome::skipped(player, account.position),
            None => {
                log::warn!("no player with id {}", player);
                return TurnOutcome::skipped(player, 0);
            }
        }

        self.stats.turns += 1;
        let name = self.name(player);
        self.observer.notify(&Event::TurnStarted {
            player: name.clone(),
            turn: self.stats.turns,
        });
        self.audit(format_args!("Turn start for {}", name));

        let event = self.random_event(player);

        /*********        MOVEMENT        *********/

        let roll = self.dice.roll().clamp(1, 6);
        let position = self.track.advance(self.ledger.accounts()[player].position, roll);
        self.ledger.set_position(player, position);

        let property = self.track.property_at(position).cloned();
        self.observer.notify(&Event::Moved {
            player: name,
            roll,
            position,
            property: property.as_ref().map(|p| p.name.clone()),
        });

        /*********        SPACE RESOLUTION        *********/

        let (resolution, amount) = match &property {
            Some(prop) => self.resolve_property(player, prop),
            None => (Resolution::NonProperty, 0),
        };

        let mut eliminated = self.check_bankruptcy(player);

        /*********        POST-MOVE ACTION        *********/

        let action = if eliminated {
            None
        } else {
            self.post_move(player)
        };

        eliminated |= self.check_bankruptcy(player);

        debug_assert!(self.ledger.is_consistent());

        TurnOutcome {
            player,
            event,
            roll: Some(roll),
            position,
            property: property.map(|p| p.name),
            resolution,
            amount,
            action,
            eliminated,
        }
    }

    /// Return the next player still in the game, in turn order, and move
    /// the rotation past them. Returns `None` once everyone is eliminated.
    pub fn next_player(&mut self) -> Option<PlayerId> {
        let accounts = self.ledger.accounts();
        let count = accounts.len();

        let next = (0..count)
            .map(|offset| (self.cursor + offset) % count)
            .find(|&id| !accounts[id].eliminated)?;

        self.cursor = (next + 1) % count;
        Some(next)
    }

    /// Stop the game once the current turn is over.
    pub fn end_game(&mut self) {
        self.over = true;
    }

    /// Take a snapshot that can be saved and restored later.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.ledger)
    }

    /*********        GETTERS        *********/

    /// Whether a player has asked for the game to end.
    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn stats(&self) -> Statistics {
        self.stats
    }

    /*********        TURN PHASES        *********/

    /// Draw and apply a random event, if random events are enabled.
    fn random_event(&mut self, player: PlayerId) -> Option<RandomEvent> {
        if !self.settings.enable_random_events {
            return None;
        }

        let event = self.dice.draw_event();
        let name = self.name(player);

        match event {
            RandomEvent::FoundMoney => {
                self.ledger.credit(player, EVENT_BONUS);
                self.observer.notify(&Event::FoundMoney {
                    player: name.clone(),
                    amount: EVENT_BONUS,
                });
                self.audit(format_args!("{} found ${}.", name, EVENT_BONUS));
            }
            // The fine is only charged to players who can comfortably pay it
            RandomEvent::Fine if self.ledger.accounts()[player].balance > EVENT_FINE => {
                self.ledger.debit(player, EVENT_FINE);
                self.observer.notify(&Event::Fined {
                    player: name.clone(),
                    amount: EVENT_FINE,
                });
                self.audit(format_args!("{} paid a ${} fine.", name, EVENT_FINE));
            }
            RandomEvent::Fine => {}
            RandomEvent::Nothing => self.observer.notify(&Event::NoEvent { player: name }),
        }

        Some(event)
    }

    /// Deal with `player` landing on `prop`. Return how it was
    /// dealt with and how much money changed hands.
    fn resolve_property(&mut self, player: PlayerId, prop: &Property) -> (Resolution, i64) {
        let name = self.name(player);

        let owner = match self.ledger.owner_of(&prop.name) {
            Some(owner) => owner,
            None => return self.offer_purchase(player, prop),
        };

        if owner == player {
            self.observer.notify(&Event::OwnProperty {
                player: name,
                property: prop.name.clone(),
            });
            return (Resolution::OwnedBySelf, 0);
        }

        let owner_name = self.name(owner);

        // Nobody collects rent for a player who's out of the game
        if self.ledger.accounts()[owner].eliminated {
            self.observer.notify(&Event::OrphanedProperty {
                player: name,
                property: prop.name.clone(),
            });
            return (Resolution::Orphaned { owner }, 0);
        }

        // Rent depends on how far the *owner* has improved the property
        let improvements = self.ledger.improvement_count(&prop.name, owner);
        let rent = rent_due(prop.base_rent, improvements, prop.multiplier);

        self.ledger.transfer(player, owner, rent);
        self.stats.rents_paid += 1;

        self.observer.notify(&Event::RentPaid {
            player: name.clone(),
            owner: owner_name.clone(),
            amount: rent,
        });
        self.audit(format_args!("{} paid ${} to {}", name, rent, owner_name));

        (Resolution::RentPaid { owner }, rent)
    }

    /// Offer the unowned `prop` to `player`, and auction it off if they don't buy it.
    fn offer_purchase(&mut self, player: PlayerId, prop: &Property) -> (Resolution, i64) {
        let cost = self.settings.property_cost;
        let account = &self.ledger.accounts()[player];
        let wants_to_buy = self.agents[player].wants_to_buy(account, &prop.name, cost);

        if wants_to_buy {
            let bought = self
                .ledger
                .ensure_funds(player, cost)
                .and_then(|_| self.ledger.record_purchase(&prop.name, player));

            match bought {
                Ok(()) => {
                    self.ledger.debit(player, cost);
                    self.stats.properties_bought += 1;

                    let name = self.name(player);
                    self.observer.notify(&Event::Bought {
                        player: name.clone(),
                        property: prop.name.clone(),
                        price: cost,
                    });
                    self.audit(format_args!("{} bought {}", name, prop.name));

                    return (Resolution::Bought, cost);
                }
                Err(e) => log::debug!("purchase of '{}' fell through: {}", prop.name, e),
            }
        }

        let result = run_auction(
            &prop.name,
            &mut self.ledger,
            &mut self.agents,
            self.observer.as_mut(),
        );

        match result.winner {
            Some(winner) => {
                self.stats.properties_bought += 1;
                self.audit(format_args!(
                    "{} won {} at auction for ${}",
                    self.name(winner),
                    prop.name,
                    result.price
                ));
                (Resolution::Auctioned { winner: Some(winner) }, result.price)
            }
            None => {
                self.audit(format_args!("No one bid on {}.", prop.name));
                (Resolution::Auctioned { winner: None }, 0)
            }
        }
    }

    /// Let `player` take their post-move action, if they get one.
    fn post_move(&mut self, player: PlayerId) -> Option<PostMoveAction> {
        let action = self.agents[player].post_move_action(&self.ledger.accounts()[player])?;

        match action {
            PostMoveAction::Upgrade => self.upgrade(player),
            PostMoveAction::Mortgage => self.mortgage(player),
            PostMoveAction::Skip => {}
            PostMoveAction::EndGame => {
                let name = self.name(player);
                self.over = true;
                self.observer.notify(&Event::EndRequested {
                    player: name.clone(),
                });
                self.audit(format_args!("{} has chosen to end the game.", name));
            }
        }

        Some(action)
    }

    fn upgrade(&mut self, player: PlayerId) {
        let property = match self.choose_property(player, PostMoveAction::Upgrade) {
            Some(property) => property,
            None => return,
        };

        match self
            .ledger
            .upgrade(&property, player, self.settings.upgrade_cost)
        {
            Ok(improvements) => {
                let name = self.name(player);
                self.observer.notify(&Event::Upgraded {
                    player: name.clone(),
                    property: property.clone(),
                    improvements,
                });
                self.audit(format_args!("{} upgraded {}", name, property));
            }
            Err(e) => self.refuse(player, e.to_string()),
        }
    }

    fn mortgage(&mut self, player: PlayerId) {
        let property = match self.choose_property(player, PostMoveAction::Mortgage) {
            Some(property) => property,
            None => return,
        };

        match self
            .ledger
            .mortgage(&property, player, self.settings.mortgage_refund())
        {
            Ok(refund) => {
                let name = self.name(player);
                self.observer.notify(&Event::Mortgaged {
                    player: name.clone(),
                    property: property.clone(),
                    refund,
                });
                self.audit(format_args!("{} mortgaged {}", name, property));
            }
            Err(e) => self.refuse(player, e.to_string()),
        }
    }

    /// Ask `player` which property `action` applies to.
    fn choose_property(&mut self, player: PlayerId, action: PostMoveAction) -> Option<String> {
        let account = &self.ledger.accounts()[player];

        if account.improvements.is_empty() {
            self.refuse(player, format!("no properties to {:?}", action).to_lowercase());
            return None;
        }

        match self.agents[player].choose_property(account, action) {
            Some(property) if self.track.contains(&property) => Some(property),
            Some(property) => {
                self.refuse(player, LedgerError::UnknownProperty(property).to_string());
                None
            }
            None => {
                self.refuse(player, "no property chosen".to_owned());
                None
            }
        }
    }

    /// Mark `player` as eliminated if they're in debt.
    /// Return whether this eliminated them.
    fn check_bankruptcy(&mut self, player: PlayerId) -> bool {
        if self.ledger.accounts()[player].balance >= 0 || !self.ledger.eliminate(player) {
            return false;
        }

        let name = self.name(player);
        self.observer.notify(&Event::Eliminated {
            player: name.clone(),
        });
        self.audit(format_args!("{} went bankrupt!", name));

        true
    }

    /*********        HELPERS        *********/

    fn from_parts(
        settings: Settings,
        ledger: Ledger,
        agents: Vec<Box<dyn Agent>>,
        dice: Box<dyn Dice>,
    ) -> Self {
        Self {
            track: Track::new(&settings),
            settings,
            ledger,
            agents,
            dice,
            observer: Box::new(Silent),
            stats: Statistics::default(),
            over: false,
            cursor: 0,
        }
    }

    fn name(&self, player: PlayerId) -> String {
        self.ledger.accounts()[player].name.clone()
    }

    /// Record a line in the audit trail, if it's enabled.
    fn audit(&self, message: fmt::Arguments<'_>) {
        if self.settings.enable_logging {
            log::info!(target: crate::audit::TARGET, "{}", message);
        }
    }

    /// Report a post-move action that couldn't be carried out. The turn goes on.
    fn refuse(&mut self, player: PlayerId, reason: String) {
        let name = self.name(player);
        log::warn!("{}: {}", name, reason);
        self.observer.notify(&Event::ActionRefused { player: name, reason });
    }
}

#[cfg(test)]
mod tests;
