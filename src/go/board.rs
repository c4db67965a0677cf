use super::GoPlayer;
use std::fmt;
use std::fmt::{Display, Formatter};
use thiserror::Error;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoardCell {
    Empty,
    Occupied(GoPlayer),
}

impl BoardCell {
    fn fingerprint_value(self) -> u64 {
        match self {
            BoardCell::Empty => 1,
            BoardCell::Occupied(GoPlayer::Black) => 2,
            BoardCell::Occupied(GoPlayer::White) => 3,
        }
    }

    fn symbol(self) -> char {
        match self {
            BoardCell::Empty => '.',
            BoardCell::Occupied(GoPlayer::Black) => 'X',
            BoardCell::Occupied(GoPlayer::White) => 'O',
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardPosition {
    pub x: usize,
    pub y: usize,
}

impl BoardPosition {
    pub fn new(x: usize, y: usize) -> BoardPosition {
        BoardPosition { x, y }
    }
}

impl Display for BoardPosition {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_fmt(format_args!("({}, {})", self.x, self.y))
    }
}

/// Content hash of a whole board, used to detect an immediate repetition (ko).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint(u64);

#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
#[error("board size must be positive, got {0}")]
pub struct BoardSizeError(pub usize);

/// A square grid of cells, stored row by row.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GoBoard {
    size: usize,
    cells: Vec<BoardCell>,
}

impl GoBoard {
    pub fn new(size: usize) -> Result<GoBoard, BoardSizeError> {
        if size == 0 {
            return Err(BoardSizeError(size));
        }

        Ok(GoBoard {
            size,
            cells: vec![BoardCell::Empty; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, position: BoardPosition) -> bool {
        position.x < self.size && position.y < self.size
    }

    fn index(&self, position: BoardPosition) -> usize {
        position.y * self.size + position.x
    }

    /// Returns `None` for positions off the board.
    pub fn get_cell(&self, position: BoardPosition) -> Option<BoardCell> {
        if self.in_bounds(position) {
            Some(self.cells[self.index(position)])
        } else {
            None
        }
    }

    pub fn is_empty_at(&self, position: BoardPosition) -> bool {
        self.get_cell(position) == Some(BoardCell::Empty)
    }

    pub fn set_cell(&mut self, position: BoardPosition, cell: BoardCell) {
        assert!(
            self.in_bounds(position),
            "Position {} is outside a {}x{} board",
            position,
            self.size,
            self.size
        );

        let index = self.index(position);
        self.cells[index] = cell;
    }

    /// The orthogonally adjacent positions that lie on the board.
    pub fn neighbours(&self, position: BoardPosition) -> impl Iterator<Item = BoardPosition> {
        let mut positions = Vec::with_capacity(4);

        if position.x > 0 {
            positions.push(BoardPosition::new(position.x - 1, position.y));
        }

        if position.y > 0 {
            positions.push(BoardPosition::new(position.x, position.y - 1));
        }

        if position.x + 1 < self.size {
            positions.push(BoardPosition::new(position.x + 1, position.y));
        }

        if position.y + 1 < self.size {
            positions.push(BoardPosition::new(position.x, position.y + 1));
        }

        positions.into_iter()
    }

    /// Every position on the board, row by row.
    pub fn positions(&self) -> impl Iterator<Item = BoardPosition> {
        let size = self.size;

        (0..size).flat_map(move |y| (0..size).map(move |x| BoardPosition::new(x, y)))
    }

    pub fn stone_count(&self, player: GoPlayer) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == BoardCell::Occupied(player))
            .count()
    }

    /// 64-bit FNV-1a over the cell sequence.
    pub fn fingerprint(&self) -> Fingerprint {
        let hash = self.cells.iter().fold(FNV_OFFSET_BASIS, |hash, cell| {
            (hash ^ cell.fingerprint_value()).wrapping_mul(FNV_PRIME)
        });

        Fingerprint(hash)
    }
}

impl Display for GoBoard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.size).enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }

            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            f.write_str(&line.join(" "))?;
        }

        Ok(())
    }
}
