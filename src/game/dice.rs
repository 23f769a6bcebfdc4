use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Something that may happen to a player at the start of their turn.
pub enum RandomEvent {
    /// The player finds money lying on the ground.
    FoundMoney,
    /// The player is fined, but only if they can comfortably pay.
    Fine,
    /// Nothing happens.
    Nothing,
}

/// The source of everything left to chance.
pub trait Dice {
    /// Roll a single six-sided die. Always returns a value in `1..=6`.
    fn roll(&mut self) -> u8;

    /// Draw one of the three random events, each equally likely.
    fn draw_event(&mut self) -> RandomEvent;
}

/// Fair dice backed by a pseudo-random number generator.
pub struct RandomDice {
    rng: SmallRng,
}

impl RandomDice {
    /// Return dice seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Return dice that always produce the same sequence for the same `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomDice {
    fn default() -> Self {
        Self::new()
    }
}

impl Dice for RandomDice {
    fn roll(&mut self) -> u8 {
        self.rng.random_range(1..=6)
    }

    fn draw_event(&mut self) -> RandomEvent {
        match self.rng.random_range(0..3) {
            0 => RandomEvent::FoundMoney,
            1 => RandomEvent::Fine,
            _ => RandomEvent::Nothing,
        }
    }
}

/// Dice that replay a fixed script, for replays and tests.
///
/// Once a script runs out, rolls fall back to 1 and events to `Nothing`.
#[derive(Clone, Debug, Default)]
pub struct LoadedDice {
    rolls: VecDeque<u8>,
    events: VecDeque<RandomEvent>,
}

impl LoadedDice {
    /// Return dice that roll `rolls` in order. Rolls outside `1..=6` are clamped.
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self {
            rolls: rolls.into_iter().map(|r| r.clamp(1, 6)).collect(),
            events: VecDeque::new(),
        }
    }

    /// Also draw `events` in order.
    pub fn with_events(mut self, events: impl IntoIterator<Item = RandomEvent>) -> Self {
        self.events = events.into_iter().collect();
        self
    }
}

impl Dice for LoadedDice {
    fn roll(&mut self) -> u8 {
        self.rolls.pop_front().unwrap_or(1)
    }

    fn draw_event(&mut self) -> RandomEvent {
        self.events.pop_front().unwrap_or(RandomEvent::Nothing)
    }
}
