mod board;
mod group;
pub mod notation;
mod rules;
mod scoring;

pub use board::{BoardCell, BoardPosition, BoardSizeError, Fingerprint, GoBoard};
pub use group::Group;
pub use rules::{resolve_move, Accepted, MoveError, MoveOutcome, Resolution};
pub use scoring::{estimate, ScoreEstimate, DEFAULT_KOMI};

use crate::config::{ConfigError, GameConfig};
use tracing::{debug, info};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GoPlayer {
    Black,
    White,
}

impl GoPlayer {
    pub fn flip(self) -> GoPlayer {
        match self {
            GoPlayer::Black => GoPlayer::White,
            GoPlayer::White => GoPlayer::Black,
        }
    }

    pub fn both() -> std::slice::Iter<'static, GoPlayer> {
        static BOTH: [GoPlayer; 2] = [GoPlayer::Black, GoPlayer::White];

        BOTH.iter()
    }
}

/// Stones each player has taken from the other.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Captures {
    black: u32,
    white: u32,
}

impl Captures {
    pub fn get(&self, player: GoPlayer) -> u32 {
        match player {
            GoPlayer::Black => self.black,
            GoPlayer::White => self.white,
        }
    }

    pub fn add(&mut self, player: GoPlayer, count: u32) {
        match player {
            GoPlayer::Black => self.black += count,
            GoPlayer::White => self.white += count,
        }
    }
}

/// Everything `undo` puts back.
#[derive(Clone, Debug, PartialEq, Eq)]
struct GameSnapshot {
    board: GoBoard,
    current_player: GoPlayer,
    captures: Captures,
    passes_in_row: u32,
    ko_guard: Option<Fingerprint>,
    show_coordinates: bool,
    game_over: bool,
}

/// A game in progress: the current position plus an undo stack of
/// independent copies of every earlier position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoGame {
    current: GameSnapshot,
    history: Vec<GameSnapshot>,
}

impl GoGame {
    pub fn new(size: usize) -> Result<GoGame, BoardSizeError> {
        Ok(GoGame {
            current: GameSnapshot {
                board: GoBoard::new(size)?,
                current_player: GoPlayer::Black,
                captures: Captures::default(),
                passes_in_row: 0,
                ko_guard: None,
                show_coordinates: false,
                game_over: false,
            },
            history: Vec::new(),
        })
    }

    /// A new game on a board the configuration has been checked to allow.
    pub fn from_config(config: &GameConfig) -> Result<GoGame, ConfigError> {
        config.validate()?;

        Ok(GoGame::new(config.size)?)
    }

    pub fn board(&self) -> &GoBoard {
        &self.current.board
    }

    pub fn get_cell(&self, position: BoardPosition) -> Option<BoardCell> {
        self.current.board.get_cell(position)
    }

    pub fn current_player(&self) -> GoPlayer {
        self.current.current_player
    }

    pub fn captures(&self) -> Captures {
        self.current.captures
    }

    pub fn passes_in_row(&self) -> u32 {
        self.current.passes_in_row
    }

    pub fn ko_guard(&self) -> Option<Fingerprint> {
        self.current.ko_guard
    }

    pub fn is_game_over(&self) -> bool {
        self.current.game_over
    }

    pub fn show_coordinates(&self) -> bool {
        self.current.show_coordinates
    }

    pub fn toggle_coordinates(&mut self) {
        self.current.show_coordinates = !self.current.show_coordinates;
    }

    /// Number of moves and passes that can be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Places a stone for the player to move.
    ///
    /// Rejections leave the game exactly as it was. On success the position the
    /// mover left becomes the ko guard, so the opponent cannot recreate it
    /// with their very next move.
    pub fn play_move(&mut self, position: BoardPosition) -> MoveOutcome {
        if self.current.game_over {
            return Err(MoveError::GameOver);
        }

        let player = self.current.current_player;
        let resolution = resolve_move(
            &self.current.board,
            player,
            position,
            self.current.ko_guard,
        )?;

        self.history.push(self.current.clone());

        self.current.ko_guard = Some(self.current.board.fingerprint());
        self.current.board = resolution.board;
        self.current.captures.add(player, resolution.captured);
        self.current.current_player = player.flip();
        self.current.passes_in_row = 0;

        Ok(Accepted {
            captured: resolution.captured,
        })
    }

    /// Two passes in a row end the game.
    pub fn pass(&mut self) -> Result<(), MoveError> {
        if self.current.game_over {
            return Err(MoveError::GameOver);
        }

        self.history.push(self.current.clone());

        self.current.ko_guard = Some(self.current.board.fingerprint());
        self.current.current_player = self.current.current_player.flip();
        self.current.passes_in_row += 1;

        if self.current.passes_in_row >= 2 {
            self.current.game_over = true;
            info!("game over after two consecutive passes");
        }

        Ok(())
    }

    /// Restores the state from before the last move or pass. Returns `false`
    /// when there is nothing left to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.current = snapshot;
                debug!(remaining = self.history.len(), "undid last action");
                true
            }
            None => false,
        }
    }

    pub fn estimate_score(&self, komi: f64) -> ScoreEstimate {
        estimate(&self.current.board, self.current.captures, komi)
    }

    /// Every point the player to move could legally play.
    pub fn legal_moves(&self) -> impl Iterator<Item = BoardPosition> + '_ {
        self.current.board.positions().filter(move |&position| {
            !self.current.game_over
                && resolve_move(
                    &self.current.board,
                    self.current.current_player,
                    position,
                    self.current.ko_guard,
                )
                .is_ok()
        })
    }
}
