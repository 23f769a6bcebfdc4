//! A turn-based Monopoly simulation: players move around the board, buy,
//! auction, improve and mortgage properties, pay each other rent, and drop
//! out when they go broke.

pub mod audit;
pub mod console;
pub mod game;
