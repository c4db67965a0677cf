use go_rules::go::notation::{column_label, row_label, star_points, MAX_LABELLED_SIZE};
use go_rules::go::{BoardCell, BoardPosition, GoGame, GoPlayer};

fn symbol(cell: Option<BoardCell>, star: bool) -> char {
    match cell {
        Some(BoardCell::Occupied(GoPlayer::Black)) => 'X',
        Some(BoardCell::Occupied(GoPlayer::White)) => 'O',
        _ if star => '+',
        _ => '.',
    }
}

/// Draws the board as text, with labels when the game asks for coordinates.
pub fn render(game: &GoGame) -> String {
    let board = game.board();
    let size = board.size();
    let stars = star_points(size);
    let labelled = game.show_coordinates() && size <= MAX_LABELLED_SIZE;

    let mut lines = Vec::with_capacity(size + 1);

    if labelled {
        let columns: Vec<String> = (0..size)
            .filter_map(column_label)
            .map(|column| column.to_string())
            .collect();

        lines.push(format!("   {}", columns.join(" ")));
    }

    for y in 0..size {
        let cells: Vec<String> = (0..size)
            .map(|x| {
                let position = BoardPosition::new(x, y);

                symbol(board.get_cell(position), stars.contains(&position)).to_string()
            })
            .collect();

        match row_label(y, size) {
            Some(row) if labelled => lines.push(format!("{:>2} {}", row, cells.join(" "))),
            _ => lines.push(cells.join(" ")),
        }
    }

    lines.join("\n")
}
