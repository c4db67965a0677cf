use super::{BoardCell, BoardPosition, Fingerprint, GoBoard, GoPlayer, Group};
use thiserror::Error;
use tracing::debug;

#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("the point is occupied or off the board")]
    Occupied,
    #[error("the move would leave its own group without liberties")]
    Suicidal,
    #[error("the move would repeat the previous position")]
    Ko,
    #[error("the game is already over")]
    GameOver,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Accepted {
    pub captured: u32,
}

pub type MoveOutcome = Result<Accepted, MoveError>;

/// The board after a legal placement, before any turn bookkeeping.
#[derive(Clone, Debug)]
pub struct Resolution {
    pub board: GoBoard,
    pub captured: u32,
}

/// Checks a placement by `player` at `position` and works out what it captures.
///
/// Opposing groups left without liberties are removed before the mover's own
/// group is checked, so a move that fills its last liberty is still legal when
/// it captures. A result whose fingerprint equals `ko_guard` is rejected as ko.
/// The input board is never modified; on success the caller receives the
/// resulting board to commit.
pub fn resolve_move(
    board: &GoBoard,
    player: GoPlayer,
    position: BoardPosition,
    ko_guard: Option<Fingerprint>,
) -> Result<Resolution, MoveError> {
    if !board.is_empty_at(position) {
        debug!(%position, "rejected: occupied");
        return Err(MoveError::Occupied);
    }

    let mut new_board = board.clone();
    new_board.set_cell(position, BoardCell::Occupied(player));

    let mut captured = 0;
    for neighbour in new_board.neighbours(position) {
        // An earlier direction may already have removed this stone.
        if new_board.get_cell(neighbour) != Some(BoardCell::Occupied(player.flip())) {
            continue;
        }

        if let Some(group) = Group::analyze(&new_board, neighbour) {
            if !group.has_liberties() {
                for &stone in group.stones() {
                    new_board.set_cell(stone, BoardCell::Empty);
                }

                captured += group.len() as u32;
            }
        }
    }

    let has_liberties =
        Group::analyze(&new_board, position).map_or(false, |group| group.has_liberties());

    if !has_liberties && captured == 0 {
        debug!(%position, "rejected: suicide");
        return Err(MoveError::Suicidal);
    }

    if ko_guard == Some(new_board.fingerprint()) {
        debug!(%position, "rejected: ko");
        return Err(MoveError::Ko);
    }

    if captured > 0 {
        debug!(%position, captured, ?player, "captured stones");
    }

    Ok(Resolution {
        board: new_board,
        captured,
    })
}
