//! Command-line surface: the clap parser and its subcommands.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "tablestakes",
    version,
    about = "Multi-player hold'em table: play, simulate, deal and rank hands"
)]
pub struct TablestakesCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play hands live, against bots or watching them
    Play {
        #[arg(long, value_enum, default_value_t = Vs::Ai)]
        vs: Vs,
        #[arg(long)]
        hands: Option<u64>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        players: Option<usize>,
        /// Bot name, or a comma-separated list assigned to seats in turn
        #[arg(long)]
        ai: Option<String>,
    },
    /// Run bots-only hands and print a tally
    Sim {
        #[arg(long)]
        hands: u64,
        #[arg(long)]
        players: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        ai: Option<String>,
        /// Append each hand to this JSONL file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Deal one hand's hole cards and board without betting
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        players: Option<usize>,
    },
    /// Name the best hand among 5 to 7 cards, e.g. `rank As Ks Qs Js Ts`
    Rank {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Opponent type for the `play` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Vs {
    /// Sit in seat 0 and answer prompts on stdin.
    Human,
    /// Every seat is a bot.
    Ai,
}

impl Vs {
    /// ```
    /// # use tablestakes_cli::Vs;
    /// assert_eq!(Vs::Ai.as_str(), "ai");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Vs::Human => "human",
            Vs::Ai => "ai",
        }
    }
}
