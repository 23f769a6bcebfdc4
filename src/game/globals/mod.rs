mod details;
pub use details::*;

use lazy_static::lazy_static;
use std::collections::HashMap;

/// The number of tiles around the board. 'Go' is at 0.
pub const BOARD_SIZE: u8 = 40;

/// The opening bid of every auction.
pub const STARTING_BID: i64 = 10;

/// The amount an AI player raises the current bid by.
pub const BID_INCREMENT: i64 = 5;

/// The amount a player gains from the "found money" random event.
pub const EVENT_BONUS: i64 = 50;

/// The fine charged by the "fine" random event.
pub const EVENT_FINE: i64 = 20;

/// The number of turns a game lasts if nobody ends it first.
pub const DEFAULT_TURN_LIMIT: u32 = 50;

lazy_static! {
    /// Names of the property tiles on the game board,
    /// in the form `HashMap<property_position, property_name>`.
    pub static ref PROPERTY_NAMES: HashMap<u8, &'static str> = HashMap::from([
        (1, "Mediterranean Avenue"),
        (3, "Baltic Avenue"),
        (5, "Reading Railroad"),
        (6, "Oriental Avenue"),
        (8, "Vermont Avenue"),
        (9, "Connecticut Avenue"),
        (11, "St. Charles Place"),
        (13, "States Avenue"),
        (14, "Virginia Avenue"),
        (16, "St. James Place"),
        (18, "Tennessee Avenue"),
        (19, "New York Avenue"),
        (21, "Kentucky Avenue"),
        (23, "Indiana Avenue"),
        (24, "Illinois Avenue"),
        (26, "Atlantic Avenue"),
        (27, "Ventnor Avenue"),
        (29, "Marvin Gardens"),
        (31, "Pacific Avenue"),
        (32, "North Carolina Avenue"),
        (34, "Pennsylvania Avenue"),
        (37, "Park Place"),
        (39, "Boardwalk"),
    ]);
}
