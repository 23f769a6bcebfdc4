use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The index of a player in turn order. Players are never removed from
/// the game's player list, so an id stays valid for the whole game.
pub type PlayerId = usize;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A property tile on the board.
pub struct Property {
    /// The name of the property. Names are unique across the board.
    pub name: String,
    /// The property's position around the board.
    pub position: u8,
    /// The rent owed for landing on the property while it's unimproved.
    pub base_rent: i64,
    /// How much of `base_rent` each improvement adds on top of the base rent.
    pub multiplier: i64,
}

impl Property {
    /// Creates a new property.
    pub fn new(name: &str, position: u8, base_rent: i64, multiplier: i64) -> Property {
        Property {
            name: name.to_owned(),
            position,
            base_rent,
            multiplier,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A player playing the game, or rather their account with the bank.
pub struct Player {
    /// The name the player goes by.
    pub name: String,
    /// The amount of money the player has. This can dip below
    /// zero right before the player gets eliminated.
    pub balance: i64,
    /// The player's position around the board. 'Go' is at 0
    /// and 'Boardwalk' (the last tile going clockwise) is at 39.
    pub position: u8,
    /// Whether the player's decisions are made by the computer.
    pub is_ai: bool,
    /// Whether the player went bankrupt and is out of the game.
    pub eliminated: bool,
    /// The properties the player owns, in the form
    /// `BTreeMap<property_name, improvement_count>`.
    pub improvements: BTreeMap<String, u32>,
}

impl Player {
    /// Create a player standing on 'Go' with `balance` in the bank.
    pub fn new(name: &str, balance: i64, is_ai: bool) -> Player {
        Player {
            name: name.to_owned(),
            balance,
            position: 0,
            is_ai,
            eliminated: false,
            improvements: BTreeMap::new(),
        }
    }

    /// Whether the player owns `property`.
    pub fn owns(&self, property: &str) -> bool {
        self.improvements.contains_key(property)
    }

    /// Names of the properties the player owns, in alphabetical order.
    pub fn owned(&self) -> Vec<String> {
        self.improvements.keys().cloned().collect()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos_color = if self.eliminated { "\x1b[31m" } else { "\x1b[36m" };

        write!(
            f,
            "{} [{}{:02}\x1b[0m] \x1b[32m${}\x1b[0m \x1b[33m{}\x1b[0mprops",
            self.name,
            pos_color,
            self.position,
            self.balance,
            self.improvements.len()
        )?;

        for (property, count) in &self.improvements {
            write!(f, "\n    {} (upgrades: {})", property, count)?;
        }

        Ok(())
    }
}
