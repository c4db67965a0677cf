//! Plain-text move scripts such as `D4 Q16 pass undo`, one command per word.
//! `#` starts a comment that runs to the end of the line.

use crate::go::notation::{parse_vertex, VertexError};
use crate::go::{Accepted, BoardPosition, GoGame, MoveError};
use pest::Parser;
use thiserror::Error;

#[derive(Parser)]
#[grammar = "script/grammar.pest"]
struct ScriptParser;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Place(BoardPosition),
    Pass,
    Undo,
    ToggleCoordinates,
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("syntax error\n{0}")]
    Syntax(Box<pest::error::Error<Rule>>),
    #[error("line {line}: {source}")]
    Vertex { line: usize, source: VertexError },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Played(Accepted),
    Passed,
    Undone,
    NothingToUndo,
    CoordinatesToggled,
    Rejected(MoveError),
}

pub fn parse(contents: &str, size: usize) -> Result<Vec<Command>, ScriptError> {
    let files = ScriptParser::parse(Rule::file, contents)
        .map_err(|error| ScriptError::Syntax(Box::new(error)))?;

    let mut commands = Vec::new();

    for pair in files.flat_map(|file| file.into_inner()) {
        let command = match pair.as_rule() {
            Rule::pass => Command::Pass,
            Rule::undo => Command::Undo,
            Rule::coords => Command::ToggleCoordinates,
            Rule::vertex => {
                let (line, _) = pair.as_span().start_pos().line_col();
                let position = parse_vertex(pair.as_str(), size)
                    .map_err(|source| ScriptError::Vertex { line, source })?;

                Command::Place(position)
            }
            _ => continue,
        };

        commands.push(command);
    }

    Ok(commands)
}

pub fn apply(game: &mut GoGame, command: Command) -> Outcome {
    let result = match command {
        Command::Place(position) => game.play_move(position).map(Outcome::Played),
        Command::Pass => game.pass().map(|_| Outcome::Passed),
        Command::Undo => Ok(if game.undo() {
            Outcome::Undone
        } else {
            Outcome::NothingToUndo
        }),
        Command::ToggleCoordinates => {
            game.toggle_coordinates();
            Ok(Outcome::CoordinatesToggled)
        }
    };

    result.unwrap_or_else(Outcome::Rejected)
}

/// Applies every command in order, carrying on past rejected moves.
pub fn replay(game: &mut GoGame, commands: &[Command]) -> Vec<Outcome> {
    commands
        .iter()
        .map(|&command| apply(game, command))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::go::{BoardCell, GoPlayer};

    #[test]
    fn parses_commands() {
        let commands = parse("D4 pass\nc3  UNDO coords", 9).unwrap();

        assert_eq!(
            commands,
            vec![
                Command::Place(BoardPosition::new(3, 5)),
                Command::Pass,
                Command::Place(BoardPosition::new(2, 6)),
                Command::Undo,
                Command::ToggleCoordinates,
            ]
        );
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let commands = parse("# opening\n\nA1 # corner\n\t# done\n", 5).unwrap();

        assert_eq!(commands, vec![Command::Place(BoardPosition::new(0, 4))]);
    }

    #[test]
    fn empty_script_is_valid() {
        assert_eq!(parse("", 19).unwrap(), Vec::new());
    }

    #[test]
    fn rejects_unknown_words() {
        assert!(matches!(
            parse("D4 resign", 9),
            Err(ScriptError::Syntax(_))
        ));
        assert!(matches!(parse("passD4", 9), Err(ScriptError::Syntax(_))));
        assert!(matches!(parse("D4x", 9), Err(ScriptError::Syntax(_))));
    }

    #[test]
    fn reports_the_line_of_a_bad_vertex() {
        let error = parse("D4\nE5\nZ9", 9).unwrap_err();

        match error {
            ScriptError::Vertex { line, source } => {
                assert_eq!(line, 3);
                assert_eq!(
                    source,
                    VertexError::Column {
                        column: 'Z',
                        size: 9
                    }
                );
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn replay_reports_each_outcome() {
        let mut game = GoGame::new(9).unwrap();
        let commands = parse("undo E5 E5 coords undo pass pass D4", 9).unwrap();

        let outcomes = replay(&mut game, &commands);

        assert_eq!(
            outcomes,
            vec![
                Outcome::NothingToUndo,
                Outcome::Played(Accepted { captured: 0 }),
                Outcome::Rejected(MoveError::Occupied),
                Outcome::CoordinatesToggled,
                Outcome::Undone,
                Outcome::Passed,
                Outcome::Passed,
                Outcome::Rejected(MoveError::GameOver),
            ]
        );
        assert!(game.is_game_over());
        // The undo rolled back the toggle along with the stone.
        assert!(!game.show_coordinates());
        assert_eq!(
            game.get_cell(BoardPosition::new(4, 4)),
            Some(BoardCell::Empty)
        );
        assert_eq!(game.current_player(), GoPlayer::Black);
    }
}
