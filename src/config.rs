//! Game configuration with construction-time validation

use thiserror::Error;

/// Errors raised when a game configuration cannot describe a winnable game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: usize, height: usize },

    #[error("win length must be at least 2, got {win_length}")]
    WinLengthTooShort { win_length: usize },

    #[error("win length {win_length} does not fit a {width}x{height} board")]
    WinLengthTooLong {
        win_length: usize,
        width: usize,
        height: usize,
    },
}

/// Fixed per-game settings: grid dimensions and the run length required
/// to win. Validated once at construction; a [`crate::GameEngine`] never
/// re-checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    width: usize,
    height: usize,
    win_length: usize,
}

impl GameConfig {
    /// Create a validated configuration.
    ///
    /// Requires `width >= 1`, `height >= 1` and
    /// `2 <= win_length <= max(width, height)`.
    pub fn new(width: usize, height: usize, win_length: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyBoard { width, height });
        }
        if win_length < 2 {
            return Err(ConfigError::WinLengthTooShort { win_length });
        }
        if win_length > width.max(height) {
            return Err(ConfigError::WinLengthTooLong {
                win_length,
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            win_length,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    #[inline]
    pub fn total_cells(&self) -> usize {
        self.width * self.height
    }
}

impl Default for GameConfig {
    /// Classic 3x3 tic-tac-toe
    fn default() -> Self {
        Self {
            width: 3,
            height: 3,
            win_length: 3,
        }
    }
}
