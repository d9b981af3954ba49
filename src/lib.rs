//! Flipside engine library.
//!
//! Exposes the board representation and capture rules, the turn-sequencing
//! driver, board rendering, and the text notation used by integration tests
//! and external frontends.

pub mod board;
pub mod game;
pub mod notation;
pub mod render;
