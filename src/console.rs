//! Playing the game from a terminal.

use crate::game::{Event, Game, Observer, PostMoveAction, Prompt};
use colored::Colorize;
use dialoguer::Input;

/*********        INPUT        *********/

/// Asks questions on the terminal. Every question is asked exactly once:
/// an answer that can't be understood is passed on as `None`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Terminal;

impl Terminal {
    fn ask(&self, question: &str) -> Option<String> {
        Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| log::warn!("couldn't read answer: {}", e))
            .ok()
    }
}

impl Prompt for Terminal {
    fn yes_no(&mut self, question: &str) -> Option<bool> {
        parse_yes_no(&self.ask(&format!("{} (y/n)", question))?)
    }

    fn bid(&mut self, question: &str, _min: i64, max: i64) -> Option<i64> {
        let answer = self.ask(&format!("{} [you have ${}]", question, max))?;
        answer.trim().parse().ok()
    }

    fn property_choice(&mut self, owned: &[String]) -> Option<String> {
        let question = format!("Enter a property ({})", owned.join(", "));
        let answer = self.ask(&question)?;
        let answer = answer.trim();

        if answer.is_empty() {
            None
        } else {
            Some(answer.to_owned())
        }
    }

    fn post_move_action(&mut self) -> Option<PostMoveAction> {
        parse_action(&self.ask("Choose an action: (u)pgrade, (m)ortgage, (s)kip, (e)nd game")?)
    }
}

/// Read a yes/no answer. Anything else is `None`.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Read a post-move action from its first letter. Anything else is `None`.
pub fn parse_action(answer: &str) -> Option<PostMoveAction> {
    match answer.trim().to_lowercase().as_str() {
        "u" | "upgrade" => Some(PostMoveAction::Upgrade),
        "m" | "mortgage" => Some(PostMoveAction::Mortgage),
        "s" | "skip" => Some(PostMoveAction::Skip),
        "e" | "end" => Some(PostMoveAction::EndGame),
        _ => None,
    }
}

/*********        OUTPUT        *********/

/// Prints what's happening in the game to the terminal.
#[derive(Copy, Clone, Debug, Default)]
pub struct Console;

impl Observer for Console {
    fn notify(&mut self, event: &Event) {
        match event {
            Event::TurnStarted { player, turn } => {
                println!("\n{} {}", format!("Turn {}:", turn).bold(), player.cyan())
            }
            Event::FoundMoney { player, amount } => {
                println!("{} found {} on the ground!", player, format!("${}", amount).green())
            }
            Event::Fined { player, amount } => {
                println!("{} had to pay {} for a fine.", player, format!("${}", amount).red())
            }
            Event::NoEvent { player } => println!("{} experiences no event this turn.", player),
            Event::Moved {
                player,
                roll,
                position,
                property,
            } => {
                println!("{} rolled {} and landed on space {}", player, roll, position);
                match property {
                    Some(property) => println!("{} landed on {}", player, property.yellow()),
                    None => println!("{} landed on a non-property space.", player),
                }
            }
            Event::Bought {
                player,
                property,
                price,
            } => println!("{} bought {} for ${}", player, property.yellow(), price),
            Event::AuctionStarted {
                property,
                opening_bid,
            } => println!(
                "Auction for {} starting at ${}.",
                property.yellow(),
                opening_bid
            ),
            Event::Bid { player, amount } => println!("{} bids ${}", player, amount),
            Event::AuctionWon {
                player,
                property,
                price,
            } => println!(
                "{} wins the auction for {} at ${}",
                player,
                property.yellow(),
                price
            ),
            Event::AuctionUnsold { property } => {
                println!("No one bid on {}. Remains unowned.", property.yellow())
            }
            Event::RentPaid {
                player,
                owner,
                amount,
            } => println!(
                "{} must pay rent of {} to {}",
                player,
                format!("${}", amount).red(),
                owner
            ),
            Event::OwnProperty { property, .. } => {
                println!("{} is owned by you. No action needed.", property.yellow())
            }
            Event::OrphanedProperty { property, .. } => println!(
                "{} belongs to a bankrupt player. Nobody collects rent.",
                property.yellow()
            ),
            Event::Upgraded {
                property,
                improvements,
                ..
            } => println!(
                "{} upgraded! Total upgrades: {}",
                property.yellow(),
                improvements
            ),
            Event::Mortgaged {
                property, refund, ..
            } => println!(
                "{} mortgaged. You gain {}.",
                property.yellow(),
                format!("${}", refund).green()
            ),
            Event::ActionRefused { reason, .. } => {
                println!("{} No action taken.", format!("{}.", reason).red())
            }
            Event::Eliminated { player } => println!("{}", format!("{} is bankrupt!", player).red().bold()),
            Event::EndRequested { player } => println!("{} has chosen to end the game.", player),
            Event::GameOver { stats } => {
                println!("\n{}", "Game Over!".bold());
                println!("\n--- Game Statistics ---\n{}", stats);
            }
        }
    }
}

/// Print how to play.
pub fn print_help() {
    println!("\n--- How to Play ---");
    println!("1. Each turn, you roll a die and move forward on the board.");
    println!("2. If you land on a property:");
    println!("   - If no one owns it, you can buy it. If you don't, it goes up for auction.");
    println!("   - If another player owns it, you must pay them rent.");
    println!("3. If your money drops below zero, you go bankrupt and are out of the game.");
    println!("4. After moving, human players can:");
    println!("   (u) Upgrade a property you own, raising its rent.");
    println!("   (m) Mortgage a property for quick cash.");
    println!("   (s) Skip.");
    println!("   (e) End the game once this turn is over.");
    println!("5. Random events may happen at the start of each turn if enabled.");
    println!("6. The game ends when the turn limit is reached, nobody is left, or a player ends it.\n");
}

/// Every property on the board with its owner, one per line.
pub fn board(game: &Game) -> String {
    let mut lines = Vec::new();

    for property in game.track().properties() {
        let mut line = format!("{}: {}", property.position, property.name);
        if let Some(owner) = game.ledger().owner_of(&property.name) {
            line.push_str(&format!(" (Owned by {})", game.ledger().accounts()[owner].name));
        }
        lines.push(line);
    }

    lines.join("\n")
}

/// Print the board with who owns what.
pub fn print_board(game: &Game) {
    println!("\n--- Board Info ---");
    println!("Number of properties: {}", game.track().properties().len());
    println!("{}", board(game));
}

/// Print the final state of `game`: standings and every player.
pub fn print_summary(game: &Game) {
    let mut standings: Vec<_> = game
        .ledger()
        .accounts()
        .iter()
        .filter(|p| !p.eliminated)
        .collect();
    standings.sort_by(|a, b| b.balance.cmp(&a.balance));

    println!("\n--- Players Sorted by Wealth ---");
    for player in standings {
        println!("{} - Money: ${}", player.name, player.balance);
    }

    println!("\n--- All Players ---");
    for player in game.ledger().accounts() {
        println!("{}", player);
    }
}
