//! # Play Command
//!
//! Live hands at a multi-seat table, rendered event by event.
//!
//! - **Human vs AI**: the human sits in seat 0 and is prompted on stdin; only their
//!   own hole cards are shown until showdown
//! - **AI vs AI**: every seat is a bot and all hole cards are shown
//!
//! Typing `q` (or closing stdin) folds the human's remaining decisions in the current
//! hand and ends the session after it.

use std::cell::Cell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use crate::cli::Vs;
use crate::config::{self, Config};
use crate::error::CliError;
use crate::formatters::{Visibility, format_stacks};
use crate::table::{Console, ConsoleRenderer, HumanPolicy};
use crate::ui;
use tablestakes_ai::create_ai;
use tablestakes_engine::decision::DecisionMaker;
use tablestakes_engine::engine::Engine;

/// The human's seat in `--vs human` games.
pub const HUMAN_SEAT: usize = 0;

/// Flags given to `play`; `None` falls back to the resolved config.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub vs: Vs,
    pub hands: Option<u64>,
    pub seed: Option<u64>,
    pub players: Option<usize>,
    pub ai: Option<String>,
}

impl PlayOptions {
    pub fn new(vs: Vs) -> Self {
        Self {
            vs,
            hands: None,
            seed: None,
            players: None,
            ai: None,
        }
    }
}

/// Handle the play command.
///
/// # Errors
///
/// `CliError::InvalidInput` for zero hands, `CliError::Config` for a bad seat count or
/// bot name, `CliError::Engine` if a hand aborts, `CliError::Io` if output fails.
///
/// # Examples
///
/// ```
/// use tablestakes_cli::Vs;
/// use tablestakes_cli::commands::{PlayOptions, handle_play_command};
/// use tablestakes_cli::config::Config;
///
/// let mut options = PlayOptions::new(Vs::Ai);
/// options.seed = Some(42);
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// let mut input = std::io::empty();
/// handle_play_command(&options, &Config::default(), &mut out, &mut err, &mut input).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Hands played: 1"));
/// ```
pub fn handle_play_command(
    options: &PlayOptions,
    cfg: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let hands = options.hands.unwrap_or(1);
    if hands == 0 {
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

    writeln!(
        out,
        "play: vs={} hands={} players={} seed={}",
        options.vs.as_str(),
        hands,
        players,
        seed
    )?;
    writeln!(
        out,
        "Blinds: SB={} BB={}",
        table_cfg.small_blind, table_cfg.big_blind
    )?;

    let console = Console::shared(out);
    let quit = Rc::new(Cell::new(false));
    let (mut human_input, visibility) = match options.vs {
        Vs::Human => (Some(stdin), Visibility::Seat(HUMAN_SEAT)),
        Vs::Ai => (None, Visibility::All),
    };

    let mut policies: Vec<Box<dyn DecisionMaker + '_>> = Vec::with_capacity(players);
    for seat in 0..players {
        if seat == HUMAN_SEAT
            && let Some(input) = human_input.take()
        {
            policies.push(Box::new(HumanPolicy::new(
                Rc::clone(&console),
                input,
                Rc::clone(&quit),
            )));
            continue;
        }
        let bot_seed = seed.wrapping_add(seat as u64 + 1);
        policies.push(create_ai(table_cfg.ai_for_seat(seat), bot_seed)?);
    }

    let mut engine = Engine::new(table_cfg.table(players).with_seed(seed), policies)?;
    engine.subscribe(Box::new(ConsoleRenderer::new(
        Rc::clone(&console),
        visibility,
    )));

    let mut played = 0u64;
    while played < hands && !quit.get() && engine.state().funded_seats() >= 2 {
        engine.play_hand()?;
        played += 1;
        if let Some(e) = console.borrow_mut().take_error() {
            return Err(e.into());
        }
    }

    let stacks = engine.state().stacks();
    drop(engine);
    {
        let mut console = console.borrow_mut();
        if quit.get() {
            console.line("Quit requested.");
        }
        console.line(&format!("Hands played: {}", played));
        console.line(&format!("Final stacks: {}", format_stacks(&stacks)));
        if let Some(e) = console.take_error() {
            return Err(e.into());
        }
    }

    if !quit.get() {
        ui::warn_session_cut_short(err, played, hands)?;
    }
    Ok(())
}
