use super::{BoardCell, BoardPosition, Captures, GoBoard, GoPlayer};
use std::collections::HashSet;
use std::fmt;
use std::fmt::{Display, Formatter};

pub const DEFAULT_KOMI: f64 = 6.5;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScoreEstimate {
    pub black_territory: u32,
    pub white_territory: u32,
    pub black_score: f64,
    pub white_score: f64,
    pub komi: f64,
}

impl ScoreEstimate {
    /// `None` when the scores are level.
    pub fn winner(&self) -> Option<GoPlayer> {
        if self.black_score > self.white_score {
            Some(GoPlayer::Black)
        } else if self.white_score > self.black_score {
            Some(GoPlayer::White)
        } else {
            None
        }
    }

    pub fn margin(&self) -> f64 {
        (self.black_score - self.white_score).abs()
    }
}

impl Display for ScoreEstimate {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_fmt(format_args!(
            "Black {:.1}, White {:.1} (komi {}): ",
            self.black_score, self.white_score, self.komi
        ))?;

        match self.winner() {
            Some(player) => f.write_fmt(format_args!("{:?} wins by {:.1}", player, self.margin())),
            None => f.write_str("draw"),
        }
    }
}

/// An empty region and the colours of the stones along its edge.
struct Region {
    size: u32,
    bordering: HashSet<GoPlayer>,
}

fn flood_empty_region(
    board: &GoBoard,
    start: BoardPosition,
    visited: &mut HashSet<BoardPosition>,
) -> Region {
    visited.insert(start);

    let mut stack = vec![start];
    let mut size = 0;
    let mut bordering = HashSet::new();

    while let Some(current) = stack.pop() {
        size += 1;

        for neighbour in board.neighbours(current) {
            match board.get_cell(neighbour) {
                Some(BoardCell::Empty) => {
                    if visited.insert(neighbour) {
                        stack.push(neighbour);
                    }
                }
                Some(BoardCell::Occupied(player)) => {
                    bordering.insert(player);
                }
                None => {}
            }
        }
    }

    Region { size, bordering }
}

/// Counts every empty region bordered by a single colour as that colour's
/// territory. All stones on the board are taken to be alive.
pub fn estimate(board: &GoBoard, captures: Captures, komi: f64) -> ScoreEstimate {
    let mut visited = HashSet::new();
    let mut black_territory = 0;
    let mut white_territory = 0;

    for position in board.positions() {
        if !board.is_empty_at(position) || visited.contains(&position) {
            continue;
        }

        let region = flood_empty_region(board, position, &mut visited);

        if region.bordering.len() != 1 {
            continue;
        }

        if region.bordering.contains(&GoPlayer::Black) {
            black_territory += region.size;
        } else {
            white_territory += region.size;
        }
    }

    ScoreEstimate {
        black_territory,
        white_territory,
        black_score: f64::from(black_territory + captures.get(GoPlayer::Black)),
        white_score: f64::from(white_territory + captures.get(GoPlayer::White)) + komi,
        komi,
    }
}
