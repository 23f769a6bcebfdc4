use super::globals::PlayerId;
use thiserror::Error;

/// Reasons a ledger operation can be refused.
///
/// None of these end a turn: the engine logs them and carries on as
/// though the player had chosen to do nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("player {player} does not own '{property}'")]
    InvalidOwnership { property: String, player: PlayerId },

    #[error("player {player} needs ${needed} but only has ${balance}")]
    InsufficientFunds {
        player: PlayerId,
        needed: i64,
        balance: i64,
    },

    #[error("'{property}' is already owned by player {owner}")]
    AlreadyOwned { property: String, owner: PlayerId },

    #[error("input {value} is outside of {min}..={max}")]
    OutOfRangeInput { value: i64, min: i64, max: i64 },

    #[error("there is no property called '{0}'")]
    UnknownProperty(String),
}

/// Settings that would break the game's rules.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("{field} can't be negative (got {value})")]
    Negative { field: &'static str, value: i64 },

    #[error("the AI bid probability must be between 0 and 1 (got {0})")]
    BidProbability(f64),

    #[error("a base rent of {base_rent} with a rent multiplier of {multiplier} is too large")]
    RentTooLarge { base_rent: i64, multiplier: i64 },
}

/// Save/restore errors
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Save file corrupted: {0}")]
    Corrupted(String),
}
