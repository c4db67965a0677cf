use super::{BoardCell, BoardPosition, GoBoard, GoPlayer};
use std::collections::HashSet;

/// A maximal orthogonally connected set of same-coloured stones together with
/// the empty points touching it.
#[derive(Clone, Debug)]
pub struct Group {
    player: GoPlayer,
    stones: Vec<BoardPosition>,
    liberties: HashSet<BoardPosition>,
}

impl Group {
    /// Flood fills from `position`. Returns `None` when the point is empty or off the board.
    pub fn analyze(board: &GoBoard, position: BoardPosition) -> Option<Group> {
        let player = match board.get_cell(position)? {
            BoardCell::Occupied(player) => player,
            BoardCell::Empty => return None,
        };

        let mut visited = HashSet::new();
        visited.insert(position);

        let mut stack = vec![position];
        let mut stones = Vec::new();
        let mut liberties = HashSet::new();

        while let Some(current) = stack.pop() {
            stones.push(current);

            for neighbour in board.neighbours(current) {
                match board.get_cell(neighbour) {
                    Some(BoardCell::Empty) => {
                        liberties.insert(neighbour);
                    }
                    Some(BoardCell::Occupied(owner)) if owner == player => {
                        if visited.insert(neighbour) {
                            stack.push(neighbour);
                        }
                    }
                    _ => {}
                }
            }
        }

        Some(Group {
            player,
            stones,
            liberties,
        })
    }

    pub fn player(&self) -> GoPlayer {
        self.player
    }

    pub fn stones(&self) -> &[BoardPosition] {
        &self.stones
    }

    pub fn liberties(&self) -> &HashSet<BoardPosition> {
        &self.liberties
    }

    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn contains(&self, position: BoardPosition) -> bool {
        self.stones.contains(&position)
    }

    pub fn has_liberties(&self) -> bool {
        !self.liberties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, stones: &[(usize, usize, GoPlayer)]) -> GoBoard {
        let mut board = GoBoard::new(size).unwrap();

        for &(x, y, player) in stones {
            board.set_cell(BoardPosition::new(x, y), BoardCell::Occupied(player));
        }

        board
    }

    #[test]
    fn empty_point_has_no_group() {
        let board = GoBoard::new(9).unwrap();

        assert!(Group::analyze(&board, BoardPosition::new(4, 4)).is_none());
        assert!(Group::analyze(&board, BoardPosition::new(9, 4)).is_none());
    }

    #[test]
    fn lone_stone_liberties() {
        let board = board_with(
            9,
            &[
                (4, 4, GoPlayer::Black),
                (0, 0, GoPlayer::Black),
                (4, 0, GoPlayer::Black),
            ],
        );

        let centre = Group::analyze(&board, BoardPosition::new(4, 4)).unwrap();
        assert_eq!(centre.len(), 1);
        assert_eq!(centre.liberties().len(), 4);

        let corner = Group::analyze(&board, BoardPosition::new(0, 0)).unwrap();
        assert_eq!(corner.liberties().len(), 2);

        let edge = Group::analyze(&board, BoardPosition::new(4, 0)).unwrap();
        assert_eq!(edge.liberties().len(), 3);
    }

    #[test]
    fn shared_liberties_are_counted_once() {
        let board = board_with(9, &[(4, 4, GoPlayer::Black), (5, 4, GoPlayer::Black)]);

        let group = Group::analyze(&board, BoardPosition::new(5, 4)).unwrap();

        assert_eq!(group.len(), 2);
        assert_eq!(group.liberties().len(), 6);
        assert_eq!(group.player(), GoPlayer::Black);
    }

    #[test]
    fn follows_only_orthogonal_same_colour_stones() {
        let board = board_with(
            5,
            &[
                (1, 1, GoPlayer::White),
                (1, 2, GoPlayer::White),
                (2, 2, GoPlayer::White),
                (3, 3, GoPlayer::White),
                (2, 1, GoPlayer::Black),
            ],
        );

        let group = Group::analyze(&board, BoardPosition::new(1, 1)).unwrap();

        assert_eq!(group.len(), 3);
        assert!(group.contains(BoardPosition::new(2, 2)));
        assert!(!group.contains(BoardPosition::new(3, 3)));
        assert!(!group.liberties().contains(&BoardPosition::new(2, 1)));
        assert!(group
            .liberties()
            .iter()
            .all(|&liberty| board.is_empty_at(liberty)));
    }

    #[test]
    fn surrounded_stone_has_no_liberties() {
        let board = board_with(
            5,
            &[
                (2, 2, GoPlayer::White),
                (1, 2, GoPlayer::Black),
                (3, 2, GoPlayer::Black),
                (2, 1, GoPlayer::Black),
                (2, 3, GoPlayer::Black),
            ],
        );

        let group = Group::analyze(&board, BoardPosition::new(2, 2)).unwrap();

        assert!(!group.has_liberties());
    }
}
