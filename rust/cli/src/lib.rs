//! # tablestakes CLI Library
//!
//! The command-line front end of the table engine.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments and executes the matching subcommand against injected
//! output streams, so it is driven the same way from `main` and from tests.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["tablestakes", "play", "--vs", "human", "--players", "4"];
//! let code = tablestakes_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Live hands against bots, or bots against each other
//! - `sim`: Bots-only hands with an optional JSONL hand history
//! - `deal`: Deal one hand for inspection
//! - `rank`: Name the best hand among 5 to 7 cards
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod table;
pub mod ui;
pub mod validation;

use cli::{Commands, TablestakesCli};
use commands::{
    PlayOptions, SimOptions, handle_cfg_command, handle_deal_command, handle_play_command,
    handle_rank_command, handle_sim_command,
};

pub use cli::Vs;
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "deal", "rank", "cfg"];

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["tablestakes", "deal", "--seed", "42", "--players", "3"];
/// let code = tablestakes_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    match TablestakesCli::try_parse_from(&argv) {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return 2;
                    }
                    0
                }
                _ => {
                    if write_usage(err, &e.to_string()).is_err() {
                        return 2;
                    }
                    2
                }
            }
        }
        Ok(cli) => match dispatch(cli.cmd, out, err) {
            Ok(()) => 0,
            Err(e) => {
                if ui::write_error(err, &e.to_string()).is_err() {
                    return 2;
                }
                2
            }
        },
    }
}

fn dispatch(cmd: Commands, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    match cmd {
        Commands::Rank { cards } => handle_rank_command(&cards, out),
        Commands::Cfg => handle_cfg_command(&config::load_with_sources()?, out),
        Commands::Deal { seed, players } => {
            let cfg = config::load_with_sources()?.config;
            let players = players.unwrap_or(cfg.players);
            config::validate_players(players)?;
            handle_deal_command(seed.or(cfg.seed), players, out)
        }
        Commands::Play {
            vs,
            hands,
            seed,
            players,
            ai,
        } => {
            let cfg = config::load_with_sources()?.config;
            let options = PlayOptions {
                vs,
                hands,
                seed,
                players,
                ai,
            };
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(&options, &cfg, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            hands,
            players,
            seed,
            ai,
            output,
        } => {
            let cfg = config::load_with_sources()?.config;
            let options = SimOptions {
                hands,
                players,
                seed,
                ai,
                output,
            };
            handle_sim_command(&options, &cfg, out, err)
        }
    }
}

fn write_usage(err: &mut dyn Write, clap_message: &str) -> std::io::Result<()> {
    writeln!(err, "{}", clap_message)?;
    writeln!(err)?;
    writeln!(err, "tablestakes hold'em CLI")?;
    writeln!(err, "Usage: tablestakes <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: tablestakes --help")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_command_parses() {
        let commands = vec![
            vec!["tablestakes", "cfg"],
            vec!["tablestakes", "play"],
            vec!["tablestakes", "play", "--vs", "human", "--players", "6"],
            vec!["tablestakes", "sim", "--hands", "1"],
            vec!["tablestakes", "deal"],
            vec!["tablestakes", "rank", "As", "Ks", "Qs", "Js", "Ts"],
        ];
        for cmd_args in commands {
            let result = TablestakesCli::try_parse_from(&cmd_args);
            assert!(result.is_ok(), "Failed to parse: {:?}", cmd_args);
        }
        assert_eq!(COMMANDS.len(), 5);
    }

    #[test]
    fn sim_requires_hands_and_rank_requires_cards() {
        assert!(TablestakesCli::try_parse_from(["tablestakes", "sim"]).is_err());
        assert!(TablestakesCli::try_parse_from(["tablestakes", "rank"]).is_err());
    }

    #[test]
    fn play_defaults_to_bots() {
        let cli = TablestakesCli::try_parse_from(["tablestakes", "play"]).unwrap();
        match cli.cmd {
            Commands::Play { vs, hands, .. } => {
                assert_eq!(vs, Vs::Ai);
                assert_eq!(hands, None);
            }
            _ => panic!("Expected Commands::Play variant"),
        }
    }
}
