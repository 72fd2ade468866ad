//! N-in-a-row marking game engine
//!
//! A two-player grid-marking game (tic-tac-toe and its generalized
//! N-in-a-row variants) with a pure game-logic core and an egui GUI:
//! - Arbitrary `width x height` boards
//! - Configurable run length required to win
//! - Pivot-centered win detection, O(win_length) per move
//! - Win takes precedence over draw on a board-filling winning move
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Grid representation and the [`Mark`] type
//! - [`config`]: Validated per-game settings
//! - [`engine`]: Game state machine: move ledger, turns, outcome
//! - [`rules`]: Directional line scans for win detection
//! - [`ui`]: egui/eframe frontend (grid drawing, click handling)
//!
//! The engine is purely passive: the UI translates pointer clicks into
//! cell coordinates, calls [`GameEngine::attempt_move`] and reacts to the
//! returned [`MoveResult`]. Nothing in the core depends on the UI.
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{GameConfig, GameEngine, Mark, Outcome};
//!
//! let mut engine = GameEngine::new(GameConfig::default());
//!
//! // X opens, O answers
//! engine.attempt_move(0, 0);
//! engine.attempt_move(1, 1);
//! assert_eq!(engine.next_mark(), Mark::X);
//!
//! // Rejections are values, not errors
//! let result = engine.attempt_move(1, 1);
//! assert!(!result.is_accepted());
//! assert_eq!(engine.outcome(), Outcome::Ongoing);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod logging;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark};
pub use config::{ConfigError, GameConfig};
pub use engine::{GameEngine, Move, MoveResult, Outcome, RejectReason};
