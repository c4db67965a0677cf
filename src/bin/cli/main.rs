mod play;
mod render;

use clap::{value_t, App, AppSettings, Arg, SubCommand};
use go_rules::config::GameConfig;
use std::error::Error;
use std::fs;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

fn init_logging(verbosity: u64) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let defaults = GameConfig::default();
    let default_size = defaults.size.to_string();
    let default_komi = defaults.komi.to_string();

    let matches = App::new("Go Rules")
        .arg(
            Arg::with_name("verbose")
                .help("Log rejected moves and captures (repeat for more detail)")
                .short("v")
                .long("verbose")
                .multiple(true),
        )
        .subcommand(
            SubCommand::with_name("play")
                .about("Replay a move script and print the resulting position and score estimate")
                .arg(
                    Arg::with_name("size")
                        .help("The board size")
                        .short("s")
                        .long("size")
                        .default_value(&default_size)
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("komi")
                        .help("Points added to White's score")
                        .short("k")
                        .long("komi")
                        .default_value(&default_komi)
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("moves")
                        .help("Commands to play, e.g. \"D4 Q16 pass undo\"")
                        .short("m")
                        .long("moves")
                        .takes_value(true)
                        .conflicts_with("file"),
                )
                .arg(
                    Arg::with_name("file")
                        .help("A file of commands to play; standard input is read if neither this nor --moves is given")
                        .short("f")
                        .long("file")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("coords")
                        .help("Label the rows and columns of the printed board")
                        .long("coords"),
                ),
        )
        .setting(AppSettings::ArgRequiredElseHelp)
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    match matches.subcommand() {
        ("play", Some(matches)) => {
            let config = GameConfig {
                size: value_t!(matches, "size", usize)?,
                komi: value_t!(matches, "komi", f64)?,
            };

            let script = match (matches.value_of("moves"), matches.value_of("file")) {
                (Some(moves), _) => moves.to_string(),
                (None, Some(path)) => fs::read_to_string(path)?,
                (None, None) => {
                    let mut contents = String::new();
                    io::stdin().read_to_string(&mut contents)?;
                    contents
                }
            };

            play::run(config, &script, matches.is_present("coords"))
        }
        _ => Ok(()),
    }
}
