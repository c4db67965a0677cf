use crate::render;
use go_rules::config::GameConfig;
use go_rules::go::{GoGame, GoPlayer};
use go_rules::script::{self, Outcome};
use std::error::Error;
use tracing::{info, warn};

fn status(game: &GoGame) -> String {
    let captures = game.captures();
    let turn = if game.is_game_over() {
        "Game over".to_string()
    } else {
        format!("{:?} to play", game.current_player())
    };

    format!(
        "{}, captures: Black {} / White {}, passes in a row: {}",
        turn,
        captures.get(GoPlayer::Black),
        captures.get(GoPlayer::White),
        game.passes_in_row()
    )
}

pub fn run(
    config: GameConfig,
    contents: &str,
    show_coordinates: bool,
) -> Result<(), Box<dyn Error>> {
    let mut game = GoGame::from_config(&config)?;

    if show_coordinates {
        game.toggle_coordinates();
    }

    let commands = script::parse(contents, config.size)?;
    info!(commands = commands.len(), size = config.size, "replaying script");

    for (command, outcome) in commands.iter().zip(script::replay(&mut game, &commands)) {
        if let Outcome::Rejected(error) = outcome {
            warn!(?command, %error, "command rejected");
        }
    }

    println!("{}", render::render(&game));
    println!();
    println!("{}", status(&game));
    println!("Estimate: {}", game.estimate_score(config.komi));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_describes_turn_and_captures() {
        let mut game = GoGame::new(9).unwrap();
        game.pass().unwrap();

        assert_eq!(
            status(&game),
            "White to play, captures: Black 0 / White 0, passes in a row: 1"
        );

        game.pass().unwrap();

        assert_eq!(
            status(&game),
            "Game over, captures: Black 0 / White 0, passes in a row: 2"
        );
    }

    #[test]
    fn rejects_invalid_config() {
        let config = GameConfig {
            size: 0,
            komi: 6.5,
        };

        assert!(run(config, "", false).is_err());
    }

    #[test]
    fn rejects_malformed_scripts() {
        assert!(run(GameConfig::default(), "D4 resign", false).is_err());
    }
}
