use super::*;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A prompt that gives pre-recorded answers, then can't be understood.
#[derive(Default)]
struct Script {
    yes: VecDeque<bool>,
    bids: VecDeque<i64>,
    choices: VecDeque<String>,
    actions: VecDeque<PostMoveAction>,
}

impl Script {
    fn yes(mut self, answers: &[bool]) -> Self {
        self.yes.extend(answers);
        self
    }

    fn bids(mut self, answers: &[i64]) -> Self {
        self.bids.extend(answers);
        self
    }

    fn choices(mut self, answers: &[&str]) -> Self {
        self.choices.extend(answers.iter().map(|s| s.to_string()));
        self
    }

    fn actions(mut self, answers: &[PostMoveAction]) -> Self {
        self.actions.extend(answers);
        self
    }

    fn human(self) -> Box<dyn Agent> {
        Box::new(Human::new(Box::new(self)))
    }
}

impl Prompt for Script {
    fn yes_no(&mut self, _: &str) -> Option<bool> {
        self.yes.pop_front()
    }

    fn bid(&mut self, _: &str, _: i64, _: i64) -> Option<i64> {
        self.bids.pop_front()
    }

    fn property_choice(&mut self, _: &[String]) -> Option<String> {
        self.choices.pop_front()
    }

    fn post_move_action(&mut self) -> Option<PostMoveAction> {
        self.actions.pop_front()
    }
}

fn quiet_settings() -> Settings {
    Settings {
        enable_random_events: false,
        enable_logging: false,
        ..Settings::default()
    }
}

fn game(seats: Vec<Box<dyn Agent>>, dice: LoadedDice) -> Game {
    game_with(quiet_settings(), seats, dice)
}

fn game_with(settings: Settings, seats: Vec<Box<dyn Agent>>, dice: LoadedDice) -> Game {
    let seats = seats
        .into_iter()
        .enumerate()
        .map(|(i, agent)| (format!("player{}", i), agent))
        .collect();

    Game::new(settings, seats, Box::new(dice))
}

fn shy_ai() -> Box<dyn Agent> {
    Box::new(Ai::seeded(0., 0))
}

fn balance(game: &Game, player: PlayerId) -> i64 {
    game.ledger().accounts()[player].balance
}

/*********        SPACE RESOLUTION        *********/

#[test]
fn buying_an_unowned_property() {
    let mut game = game(
        vec![Script::default().yes(&[true]).human(), shy_ai()],
        LoadedDice::new([1]),
    );

    let outcome = game.run_turn(0);

    assert_eq!(outcome.position, 1);
    assert_eq!(outcome.property.as_deref(), Some("Mediterranean Avenue"));
    assert_eq!(outcome.resolution, Resolution::Bought);
    assert_eq!(outcome.amount, 100);
    assert_eq!(balance(&game, 0), 1400);
    assert_eq!(game.ledger().owner_of("Mediterranean Avenue"), Some(0));
    assert_eq!(game.ledger().improvement_count("Mediterranean Avenue", 0), 0);
    assert_eq!(game.stats().properties_bought, 1);
}

#[test]
fn landing_on_a_non_property_does_nothing() {
    let mut game = game(vec![shy_ai(), shy_ai()], LoadedDice::new([2]));

    let outcome = game.run_turn(0);

    assert_eq!(outcome.resolution, Resolution::NonProperty);
    assert_eq!(outcome.property, None);
    assert_eq!(game.ledger().total_money(), 3000);
}

#[test]
fn rent_uses_the_owners_improvements() {
    let mut game = game(
        vec![Script::default().human(), shy_ai()],
        LoadedDice::new([3]),
    );
    game.ledger.record_purchase("Baltic Avenue", 1).unwrap();
    game.ledger.upgrade("Baltic Avenue", 1, 50).unwrap();
    game.ledger.upgrade("Baltic Avenue", 1, 50).unwrap();
    let total = game.ledger().total_money();

    let outcome = game.run_turn(0);

    assert_eq!(outcome.resolution, Resolution::RentPaid { owner: 1 });
    assert_eq!(outcome.amount, 250);
    assert_eq!(balance(&game, 0), 1500 - 250);
    assert_eq!(balance(&game, 1), 1400 + 250);
    assert_eq!(game.ledger().total_money(), total);
    assert_eq!(game.stats().rents_paid, 1);
}

#[test]
fn landing_on_your_own_property_is_free() {
    let mut game = game(
        vec![Script::default().human(), shy_ai()],
        LoadedDice::new([3]),
    );
    game.ledger.record_purchase("Baltic Avenue", 0).unwrap();

    let outcome = game.run_turn(0);

    assert_eq!(outcome.resolution, Resolution::OwnedBySelf);
    assert_eq!(balance(&game, 0), 1500);
}

#[test]
fn declined_property_goes_to_auction() {
    let mut game = game(
        vec![
            Script::default().yes(&[false]).bids(&[0]).human(),
            Script::default().bids(&[35]).human(),
        ],
        LoadedDice::new([1]),
    );

    let outcome = game.run_turn(0);

    assert_eq!(outcome.resolution, Resolution::Auctioned { winner: Some(1) });
    assert_eq!(outcome.amount, 35);
    assert_eq!(game.ledger().owner_of("Mediterranean Avenue"), Some(1));
    assert_eq!(balance(&game, 1), 1465);
    assert_eq!(balance(&game, 0), 1500);
}

#[test]
fn unaffordable_purchase_goes_to_auction() {
    let mut game = game(
        vec![Script::default().yes(&[true]).human(), shy_ai()],
        LoadedDice::new([1]),
    );
    game.ledger.debit(0, 1450);

    let outcome = game.run_turn(0);

    assert_eq!(outcome.resolution, Resolution::Auctioned { winner: None });
    assert_eq!(balance(&game, 0), 50);
    assert!(!game.ledger().is_owned("Mediterranean Avenue"));
}

#[test]
fn unsold_property_is_offered_again_next_time() {
    let mut game = game(
        vec![Script::default().yes(&[false, true]).human(), shy_ai()],
        LoadedDice::new([1]),
    );

    let first = game.run_turn(0);
    assert_eq!(first.resolution, Resolution::Auctioned { winner: None });
    assert!(!game.ledger().is_owned("Mediterranean Avenue"));

    // Put the player back on 'Go' so they land on the same tile
    game.ledger.set_position(0, 0);
    game.dice = Box::new(LoadedDice::new([1]));

    let second = game.run_turn(0);
    assert_eq!(second.resolution, Resolution::Bought);
    assert_eq!(game.ledger().owner_of("Mediterranean Avenue"), Some(0));
}

/*********        BANKRUPTCY        *********/

#[test]
fn going_negative_on_rent_eliminates_the_player() {
    let mut game = game(
        vec![Script::default().human(), shy_ai()],
        LoadedDice::new([3, 3]),
    );
    game.ledger.record_purchase("Baltic Avenue", 1).unwrap();
    game.ledger.upgrade("Baltic Avenue", 1, 50).unwrap();
    game.ledger.upgrade("Baltic Avenue", 1, 50).unwrap();
    game.ledger.debit(0, 1500 - 245);

    let outcome = game.run_turn(0);

    assert!(outcome.eliminated);
    assert_eq!(outcome.action, None);
    assert_eq!(balance(&game, 0), -5);
    assert!(game.ledger().accounts()[0].eliminated);

    let before = game.ledger().accounts().to_vec();
    let again = game.run_turn(0);

    assert_eq!(again.resolution, Resolution::Skipped);
    assert_eq!(game.ledger().accounts(), &before[..]);
}

#[test]
fn eliminated_owners_collect_no_rent() {
    let mut game = game(
        vec![Script::default().human(), shy_ai()],
        LoadedDice::new([3]),
    );
    game.ledger.record_purchase("Baltic Avenue", 1).unwrap();
    game.ledger.eliminate(1);

    let outcome = game.run_turn(0);

    assert_eq!(outcome.resolution, Resolution::Orphaned { owner: 1 });
    assert_eq!(balance(&game, 0), 1500);
    assert_eq!(game.ledger().owner_of("Baltic Avenue"), Some(1));
}

/*********        POST-MOVE ACTIONS        *********/

#[test]
fn upgrading_an_owned_property() {
    let mut game = game(
        vec![
            Script::default()
                .actions(&[PostMoveAction::Upgrade])
                .choices(&["Boardwalk"])
                .human(),
            shy_ai(),
        ],
        LoadedDice::new([2]),
    );
    game.ledger.record_purchase("Boardwalk", 0).unwrap();

    let outcome = game.run_turn(0);

    assert_eq!(outcome.action, Some(PostMoveAction::Upgrade));
    assert_eq!(game.ledger().improvement_count("Boardwalk", 0), 1);
    assert_eq!(balance(&game, 0), 1450);
}

#[test]
fn upgrading_without_funds_is_a_no_op() {
    let mut game = game(
        vec![
            Script::default()
                .actions(&[PostMoveAction::Upgrade])
                .choices(&["Boardwalk"])
                .human(),
            shy_ai(),
        ],
        LoadedDice::new([2]),
    );
    game.ledger.record_purchase("Boardwalk", 0).unwrap();
    game.ledger.debit(0, 1470);

    let outcome = game.run_turn(0);

    assert_eq!(outcome.action, Some(PostMoveAction::Upgrade));
    assert!(!outcome.eliminated);
    assert_eq!(game.ledger().improvement_count("Boardwalk", 0), 0);
    assert_eq!(balance(&game, 0), 30);
}

#[test]
fn choosing_someone_elses_property_is_a_no_op() {
    let mut game = game(
        vec![
            Script::default()
                .actions(&[PostMoveAction::Mortgage])
                .choices(&["Park Place"])
                .human(),
            shy_ai(),
        ],
        LoadedDice::new([2]),
    );
    game.ledger.record_purchase("Boardwalk", 0).unwrap();
    game.ledger.record_purchase("Park Place", 1).unwrap();

    game.run_turn(0);

    assert_eq!(balance(&game, 0), 1500);
    assert_eq!(balance(&game, 1), 1500);
}

#[test]
fn mortgaging_pays_half_the_property_cost_and_keeps_rent() {
    let mut game = game(
        vec![
            Script::default()
                .actions(&[PostMoveAction::Mortgage])
                .choices(&["Baltic Avenue"])
                .human(),
            shy_ai(),
        ],
        LoadedDice::new([2, 3]),
    );
    game.ledger.record_purchase("Baltic Avenue", 0).unwrap();

    game.run_turn(0);
    assert_eq!(balance(&game, 0), 1550);
    assert_eq!(game.ledger().owner_of("Baltic Avenue"), Some(0));

    // The mortgaged property still earns rent
    let outcome = game.run_turn(1);
    assert_eq!(outcome.resolution, Resolution::RentPaid { owner: 0 });
    assert_eq!(balance(&game, 0), 1600);
}

#[test]
fn gibberish_action_is_a_skip() {
    let mut game = game(vec![Script::default().human(), shy_ai()], LoadedDice::new([2]));

    let outcome = game.run_turn(0);

    assert_eq!(outcome.action, Some(PostMoveAction::Skip));
    assert_eq!(balance(&game, 0), 1500);
}

#[test]
fn ai_players_take_no_post_move_action() {
    let mut game = game(vec![shy_ai(), shy_ai()], LoadedDice::new([2]));

    assert_eq!(game.run_turn(0).action, None);
}

#[test]
fn ending_the_game_stops_play_after_the_turn() {
    let mut game = game(
        vec![
            Script::default().actions(&[PostMoveAction::EndGame]).human(),
            shy_ai(),
        ],
        LoadedDice::new([2, 2, 2]),
    );

    let stats = game.play();

    assert!(game.is_over());
    assert_eq!(stats.turns, 1);
}

/*********        RANDOM EVENTS        *********/

#[test]
fn random_events_move_money_in_and_out_of_the_bank() {
    let settings = Settings {
        enable_random_events: true,
        ..quiet_settings()
    };
    let dice = LoadedDice::new([2, 2, 3]).with_events([
        RandomEvent::FoundMoney,
        RandomEvent::Fine,
        RandomEvent::Nothing,
    ]);
    let mut game = game_with(settings, vec![shy_ai(), shy_ai()], dice);

    assert_eq!(game.run_turn(0).event, Some(RandomEvent::FoundMoney));
    assert_eq!(balance(&game, 0), 1550);

    assert_eq!(game.run_turn(0).event, Some(RandomEvent::Fine));
    assert_eq!(balance(&game, 0), 1530);

    assert_eq!(game.run_turn(0).event, Some(RandomEvent::Nothing));
    assert_eq!(balance(&game, 0), 1530);
}

#[test]
fn fines_are_waived_for_the_nearly_broke() {
    let settings = Settings {
        enable_random_events: true,
        ..quiet_settings()
    };
    let dice = LoadedDice::new([2]).with_events([RandomEvent::Fine]);
    let mut game = game_with(settings, vec![shy_ai(), shy_ai()], dice);
    game.ledger.debit(0, 1480);

    game.run_turn(0);

    assert_eq!(balance(&game, 0), 20);
}

#[test]
fn disabled_random_events_are_never_drawn() {
    let dice = LoadedDice::new([2]).with_events([RandomEvent::FoundMoney]);
    let mut game = game(vec![shy_ai(), shy_ai()], dice);

    assert_eq!(game.run_turn(0).event, None);
    assert_eq!(balance(&game, 0), 1500);
}

/*********        TURN ROTATION        *********/

#[test]
fn rotation_skips_eliminated_players() {
    let mut game = game(vec![shy_ai(), shy_ai(), shy_ai()], LoadedDice::default());
    game.ledger.eliminate(1);

    let order: Vec<_> = (0..4).map(|_| game.next_player()).collect();

    assert_eq!(order, vec![Some(0), Some(2), Some(0), Some(2)]);
}

#[test]
fn rotation_ends_when_everyone_is_out() {
    let mut game = game(vec![shy_ai(), shy_ai()], LoadedDice::default());
    game.ledger.eliminate(0);
    game.ledger.eliminate(1);

    assert_eq!(game.next_player(), None);
    assert_eq!(game.play().turns, 0);
}

#[test]
fn play_stops_at_the_turn_limit() {
    let settings = Settings {
        turn_limit: 7,
        ..quiet_settings()
    };
    let mut game = game_with(settings, vec![shy_ai(), shy_ai()], LoadedDice::new([2; 7]));

    assert_eq!(game.play().turns, 7);
}

/// Keeps every event where the test can still see it.
struct Shared(Rc<RefCell<Vec<Event>>>);

impl Observer for Shared {
    fn notify(&mut self, event: &Event) {
        self.0.borrow_mut().push(event.clone());
    }
}

#[test]
fn final_statistics_are_reported_to_the_observer() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let settings = Settings {
        turn_limit: 2,
        ..quiet_settings()
    };
    let mut game = game_with(settings, vec![shy_ai(), shy_ai()], LoadedDice::new([1, 3]))
        .with_observer(Box::new(Shared(Rc::clone(&events))));

    let stats = game.play();

    assert_eq!(stats.turns, 2);
    assert_eq!(stats.properties_bought, 2);
    assert_eq!(events.borrow().last(), Some(&Event::GameOver { stats }));
}

/*********        PERSISTENCE        *********/

#[test]
fn restoring_needs_an_agent_per_player() {
    let game = game(vec![shy_ai(), shy_ai()], LoadedDice::default());

    let restored = Game::restore(
        quiet_settings(),
        game.snapshot(),
        vec![shy_ai()],
        Box::new(LoadedDice::default()),
    );

    assert!(matches!(restored, Err(SaveError::Corrupted(_))));
}

#[test]
fn restored_games_keep_their_ledger() {
    let mut first = game(
        vec![Script::default().yes(&[true]).human(), shy_ai()],
        LoadedDice::new([1]),
    );
    first.run_turn(0);

    let restored = Game::restore(
        quiet_settings(),
        first.snapshot(),
        vec![Script::default().human(), shy_ai()],
        Box::new(LoadedDice::default()),
    )
    .unwrap();

    assert_eq!(restored.ledger().accounts(), first.ledger().accounts());
    assert_eq!(restored.ledger().owner_of("Mediterranean Avenue"), Some(0));
}

#[test]
fn choosing_a_made_up_property_is_a_no_op() {
    let mut game = game(
        vec![
            Script::default()
                .actions(&[PostMoveAction::Upgrade])
                .choices(&["Atlantis"])
                .human(),
            shy_ai(),
        ],
        LoadedDice::new([2]),
    );
    game.ledger.record_purchase("Boardwalk", 0).unwrap();

    let outcome = game.run_turn(0);

    assert_eq!(outcome.action, Some(PostMoveAction::Upgrade));
    assert_eq!(balance(&game, 0), 1500);
    assert_eq!(game.ledger().improvement_count("Boardwalk", 0), 0);
}
