//! GUI module for the marking game
//!
//! This module provides a native Rust GUI using egui/eframe. It is a thin
//! adapter: clicks become cell coordinates for the engine, and the engine's
//! [`crate::MoveResult`] drives everything shown on screen.

mod app;
mod board_view;
mod theme;

pub use app::TicTacToeApp;
