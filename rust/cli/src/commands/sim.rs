//! Simulation command handler: bots only, no per-event output.
//!
//! Plays up to N hands and prints a per-seat tally. With `--output` every hand is
//! appended to a JSONL hand history as it finishes.
//!
//! # Examples
//!
//! ```no_run
//! use tablestakes_cli::commands::{SimOptions, handle_sim_command};
//! use tablestakes_cli::config::Config;
//! use std::io;
//!
//! let mut options = SimOptions::new(1000);
//! options.seed = Some(42);
//! options.output = Some("data/sim.jsonl".into());
//! handle_sim_command(&options, &Config::default(), &mut io::stdout(), &mut io::stderr()).unwrap();
//! ```

use crate::config::{self, Config};
use crate::error::CliError;
use crate::formatters::format_stacks;
use crate::ui;
use std::io::Write;
use std::path::PathBuf;
use tablestakes_ai::create_ai;
use tablestakes_engine::decision::DecisionMaker;
use tablestakes_engine::engine::Engine;
use tablestakes_engine::logger::HandLogger;
use tracing::debug;

/// Flags given to `sim`; `None` falls back to the resolved config.
#[derive(Debug, Clone)]
pub struct SimOptions {
    pub hands: u64,
    pub players: Option<usize>,
    pub seed: Option<u64>,
    pub ai: Option<String>,
    pub output: Option<PathBuf>,
}

impl SimOptions {
    pub fn new(hands: u64) -> Self {
        Self {
            hands,
            players: None,
            seed: None,
            ai: None,
            output: None,
        }
    }
}

/// Handle the sim command.
///
/// # Errors
///
/// `CliError::InvalidInput` for zero hands, `CliError::Config` for a bad seat count or
/// bot name, `CliError::Engine` if a hand aborts, `CliError::Io` if the hand history
/// cannot be written.
pub fn handle_sim_command(
    options: &SimOptions,
    cfg: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if options.hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let players = options.players.unwrap_or(cfg.players);
    config::validate_players(players)?;
    let table_cfg = Config {
        ai: options.ai.clone().unwrap_or_else(|| cfg.ai.clone()),
        ..cfg.clone()
    };
    config::validate_ai_list(&table_cfg.ai)?;
    let seed = options.seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut policies: Vec<Box<dyn DecisionMaker>> = Vec::with_capacity(players);
    for seat in 0..players {
        policies.push(create_ai(
            table_cfg.ai_for_seat(seat),
            seed.wrapping_add(seat as u64 + 1),
        )?);
    }
    let mut engine = Engine::new(table_cfg.table(players).with_seed(seed), policies)?;

    let mut logger = match &options.output {
        Some(path) => Some(HandLogger::create(path)?),
        None => None,
    };
    let blinds = [table_cfg.small_blind, table_cfg.big_blind];

    writeln!(
        out,
        "sim: hands={} players={} seed={} ai={}",
        options.hands, players, seed, table_cfg.ai
    )?;

    let mut wins = vec![0u64; players];
    let mut played = 0u64;
    while played < options.hands && engine.state().funded_seats() >= 2 {
        let summary = engine.play_hand()?;
        played += 1;
        for seat in summary.winners() {
            wins[seat] += 1;
        }
        if let Some(logger) = logger.as_mut() {
            let record = logger.log_summary(Some(seed), blinds, &summary)?;
            debug!(hand_id = %record.hand_id, "hand recorded");
        }
    }

    let stacks = engine.state().stacks();
    writeln!(out, "Hands played: {}", played)?;
    writeln!(out, "Final stacks: {}", format_stacks(&stacks))?;
    for (seat, won) in wins.iter().enumerate() {
        let name = engine.policy_name(seat).unwrap_or("?");
        let net = i64::from(stacks[seat]) - i64::from(table_cfg.stack);
        writeln!(
            out,
            "seat {} ({}): won {} hands, net {:+}",
            seat, name, won, net
        )?;
    }
    if let Some(path) = &options.output {
        writeln!(out, "Hand history: {}", path.display())?;
    }

    ui::warn_session_cut_short(err, played, options.hands)?;
    Ok(())
}
