//! Terminal falling-block game.
//!
//! `core` is the rules engine: shapes, rotation, board occupancy,
//! gravity, line clearing, the hold mechanic. `input` and `term` are
//! the thin glue that turns key presses into actions and snapshots
//! into a terminal frame.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
