use crate::go::notation::MAX_LABELLED_SIZE;
use crate::go::{BoardSizeError, GoGame, DEFAULT_KOMI};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub size: usize,
    pub komi: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("board size must be between 1 and {max}, got {size}")]
    Size { size: usize, max: usize },
    #[error("komi must be a finite, non-negative number, got {0}")]
    Komi(f64),
    #[error(transparent)]
    Board(#[from] BoardSizeError),
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            size: 19,
            komi: DEFAULT_KOMI,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size > MAX_LABELLED_SIZE {
            return Err(ConfigError::Size {
                size: self.size,
                max: MAX_LABELLED_SIZE,
            });
        }

        if !self.komi.is_finite() || self.komi < 0.0 {
            return Err(ConfigError::Komi(self.komi));
        }

        Ok(())
    }

    pub fn new_game(&self) -> Result<GoGame, ConfigError> {
        GoGame::from_config(self)
    }
}
