use super::globals::*;
use super::outcome::PostMoveAction;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Where a human player's answers come from, like a terminal or a UI.
///
/// Every method returns `None` when the answer couldn't be understood.
/// Callers treat that as the safe choice (declining, passing, or doing
/// nothing) and never ask again.
pub trait Prompt {
    /// Ask a yes/no question.
    fn yes_no(&mut self, question: &str) -> Option<bool>;

    /// Ask for a bid between `min` and `max`. The answer isn't guaranteed
    /// to be in range; 0 means the player passes.
    fn bid(&mut self, question: &str, min: i64, max: i64) -> Option<i64>;

    /// Ask the player to pick one of `owned`. The answer isn't guaranteed
    /// to be one of them.
    fn property_choice(&mut self, owned: &[String]) -> Option<String>;

    /// Ask what the player wants to do after moving.
    fn post_move_action(&mut self) -> Option<PostMoveAction>;
}

/// The "brains" of a player: makes every decision on the player's behalf.
pub trait Agent {
    /// Whether the decisions are made by the computer.
    fn is_ai(&self) -> bool;

    /// Whether to buy the unowned `property` for `cost`.
    fn wants_to_buy(&mut self, player: &Player, property: &str, cost: i64) -> bool;

    /// Return the amount to bid on `property`, or `None` to pass.
    fn bid(&mut self, player: &Player, property: &str, current_bid: i64) -> Option<i64>;

    /// Return the action to take after moving, or `None` if
    /// this kind of player doesn't get to take one.
    fn post_move_action(&mut self, player: &Player) -> Option<PostMoveAction>;

    /// Pick which of the player's properties `action` applies to.
    fn choose_property(&mut self, player: &Player, action: PostMoveAction) -> Option<String>;
}

/*********        FOR AI PLAYERS        *********/

/// A computer player following fixed rules of thumb.
pub struct Ai {
    /// The chance of raising the bid whenever an auction comes around.
    bid_probability: f64,
    rng: SmallRng,
}

impl Ai {
    /// Return a new AI agent seeded from the operating system.
    pub fn new(bid_probability: f64) -> Ai {
        Ai::with_rng(bid_probability, SmallRng::from_os_rng())
    }

    /// Return a new AI agent whose bids are reproducible for the same `seed`.
    pub fn seeded(bid_probability: f64, seed: u64) -> Ai {
        Ai::with_rng(bid_probability, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(bid_probability: f64, rng: SmallRng) -> Ai {
        // A NaN probability would survive `clamp`
        let bid_probability = if bid_probability.is_nan() {
            0.
        } else {
            bid_probability.clamp(0., 1.)
        };

        Ai { bid_probability, rng }
    }
}

impl Agent for Ai {
    fn is_ai(&self) -> bool {
        true
    }

    /// Buy whenever the purchase would leave more than half the player's money.
    fn wants_to_buy(&mut self, player: &Player, _property: &str, cost: i64) -> bool {
        player.balance > cost * 2
    }

    /// Flip a weighted coin and raise by `BID_INCREMENT` if it comes up heads.
    fn bid(&mut self, player: &Player, _property: &str, current_bid: i64) -> Option<i64> {
        let raise = current_bid + BID_INCREMENT;

        if self.rng.random_bool(self.bid_probability) && player.balance >= raise {
            Some(raise)
        } else {
            None
        }
    }

    fn post_move_action(&mut self, _player: &Player) -> Option<PostMoveAction> {
        None
    }

    fn choose_property(&mut self, _player: &Player, _action: PostMoveAction) -> Option<String> {
        None
    }
}

/*********        FOR HUMAN PLAYERS        *********/

/// A physical human player answering through a `Prompt`.
pub struct Human {
    prompt: Box<dyn Prompt>,
}

impl Human {
    /// Return a new human agent.
    pub fn new(prompt: Box<dyn Prompt>) -> Human {
        Human { prompt }
    }
}

impl Agent for Human {
    fn is_ai(&self) -> bool {
        false
    }

    fn wants_to_buy(&mut self, player: &Player, property: &str, cost: i64) -> bool {
        let question = format!(
            "{}, {} is available for purchase for ${}. Buy?",
            player.name, property, cost
        );

        self.prompt.yes_no(&question).unwrap_or(false)
    }

    fn bid(&mut self, player: &Player, property: &str, current_bid: i64) -> Option<i64> {
        let question = format!(
            "{}, enter your bid for {} (0 to pass, must be >= {})",
            player.name, property, current_bid
        );

        match self.prompt.bid(&question, current_bid, player.balance) {
            Some(0) | None => None,
            bid => bid,
        }
    }

    fn post_move_action(&mut self, _player: &Player) -> Option<PostMoveAction> {
        // Gibberish counts as skipping
        Some(self.prompt.post_move_action().unwrap_or(PostMoveAction::Skip))
    }

    fn choose_property(&mut self, player: &Player, _action: PostMoveAction) -> Option<String> {
        self.prompt.property_choice(&player.owned())
    }
}
