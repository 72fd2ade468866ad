//! Rules for the marking game
//!
//! This module implements terminal-state detection:
//! - Win condition: a run of `win_length` same-mark cells through the
//!   most recent move, in any of four directions
//! - Draw condition: full board with no winning run

pub mod win;

// Re-exports for convenient access
pub use win::winning_line;
