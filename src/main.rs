use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use monopoly_ledger::audit::Split;
use monopoly_ledger::console::{print_board, print_help, print_summary, Console, Terminal};
use monopoly_ledger::game::{save, Agent, Ai, Dice, Game, Human, RandomDice, Settings};

#[derive(Parser, Debug)]
#[command(version, about = "A simplified game of Monopoly")]
struct Args {
    /// Player names, in turn order. Every second player is an AI by default.
    #[arg(required_unless_present = "load")]
    players: Vec<String>,

    /// Make every player an AI.
    #[arg(long)]
    all_ai: bool,

    /// Make every player a human.
    #[arg(long, conflicts_with = "all_ai")]
    no_ai: bool,

    /// JSON file with game settings.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    starting_money: Option<i64>,

    #[arg(long)]
    property_cost: Option<i64>,

    #[arg(long)]
    base_rent: Option<i64>,

    #[arg(long)]
    rent_multiplier: Option<i64>,

    #[arg(long)]
    upgrade_cost: Option<i64>,

    #[arg(long)]
    turn_limit: Option<u32>,

    #[arg(long)]
    ai_bid_probability: Option<f64>,

    /// Turn off the random event at the start of each turn.
    #[arg(long)]
    no_random_events: bool,

    /// Turn off the audit trail.
    #[arg(long)]
    no_logging: bool,

    /// Seed for the dice and the AI players, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Resume the game saved in this file.
    #[arg(long)]
    load: Option<PathBuf>,

    /// Where to save the game when it ends.
    #[arg(long, default_value = "savegame.json")]
    save: PathBuf,

    /// Where the audit trail is appended.
    #[arg(long, default_value = "game_log.txt")]
    audit_log: PathBuf,
}

impl Args {
    /// Settings from the config file, if any, overridden by the command line.
    fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                Settings::from_json(&json).with_context(|| format!("parsing {}", path.display()))?
            }
            None => Settings::default(),
        };

        if let Some(v) = self.starting_money {
            settings.starting_money = v;
        }
        if let Some(v) = self.property_cost {
            settings.property_cost = v;
        }
        if let Some(v) = self.base_rent {
            settings.base_rent = v;
        }
        if let Some(v) = self.rent_multiplier {
            settings.rent_multiplier = v;
        }
        if let Some(v) = self.upgrade_cost {
            settings.upgrade_cost = v;
        }
        if let Some(v) = self.turn_limit {
            settings.turn_limit = v;
        }
        if let Some(v) = self.ai_bid_probability {
            settings.ai_bid_probability = v;
        }
        if self.no_random_events {
            settings.enable_random_events = false;
        }
        if self.no_logging {
            settings.enable_logging = false;
        }

        settings.validate().context("invalid settings")?;
        Ok(settings)
    }

    fn is_ai(&self, index: usize) -> bool {
        self.all_ai || (!self.no_ai && index % 2 == 1)
    }

    fn agent(&self, index: usize, is_ai: bool, settings: &Settings) -> Box<dyn Agent> {
        if !is_ai {
            return Box::new(Human::new(Box::new(Terminal)));
        }

        match self.seed {
            Some(seed) => Box::new(Ai::seeded(settings.ai_bid_probability, seed.wrapping_add(1 + index as u64))),
            None => Box::new(Ai::new(settings.ai_bid_probability)),
        }
    }

    fn dice(&self) -> Box<dyn Dice> {
        match self.seed {
            Some(seed) => Box::new(RandomDice::seeded(seed)),
            None => Box::new(RandomDice::new()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = args.settings()?;

    let audit_log = settings.enable_logging.then_some(args.audit_log.as_path());
    Split::new(audit_log)
        .with_context(|| format!("opening {}", args.audit_log.display()))?
        .init()?;

    let game = match &args.load {
        Some(path) => {
            let snapshot = save::load(path)?
                .with_context(|| format!("no save file found at {}", path.display()))?;
            let agents = snapshot
                .players
                .iter()
                .enumerate()
                .map(|(i, p)| args.agent(i, p.is_ai, &settings))
                .collect();

            println!("Game loaded from {}", path.display());
            Game::restore(settings, snapshot, agents, args.dice())?
        }
        None => {
            let seats = args
                .players
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), args.agent(i, args.is_ai(i), &settings)))
                .collect();

            Game::new(settings, seats, args.dice())
        }
    };
    let mut game = game.with_observer(Box::new(Console));

    println!("Welcome to Monopoly Simplified!");
    print_help();
    println!("--- Game Settings ---\n{}", game.settings());

    game.play();
    print_summary(&game);
    print_board(&game);

    save::save(&args.save, &game.snapshot())?;
    println!("Game saved to {}", args.save.display());

    Ok(())
}
