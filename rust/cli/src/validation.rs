//! Input parsing and validation for the interactive prompt.
//!
//! Parsing turns a line of text into a [`PlayerInput`]; [`resolve_input`] then checks
//! it against the seat's [`DecisionRequest`] so a typo is re-prompted instead of
//! reaching the engine, which would fold the seat.

use tablestakes_engine::decision::{Decision, DecisionRequest};
use tablestakes_engine::player::ActionKind;

/// What the player typed, before it is checked against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    Fold,
    Check,
    Call,
    /// Bet to this street total.
    Bet(u32),
    /// Raise to this street total.
    Raise(u32),
    AllIn,
}

/// Result type for parsing user input into player actions.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(PlayerInput),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a [`PlayerInput`] or the quit command.
///
/// Accepts the following input formats (case-insensitive):
/// - "f" or "fold"
/// - "x", "k" or "check"
/// - "c" or "call"
/// - "bet N" / "raise N", where N is the street total
/// - "allin" or "all-in"
/// - "q" or "quit"
///
/// # Example
///
/// ```rust
/// # use tablestakes_cli::validation::{parse_player_action, ParseResult, PlayerInput};
/// assert_eq!(parse_player_action("fold"), ParseResult::Action(PlayerInput::Fold));
/// assert_eq!(parse_player_action("Raise 60"), ParseResult::Action(PlayerInput::Raise(60)));
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("shove") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&command) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match command {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(PlayerInput::Fold),
        "check" | "x" | "k" => ParseResult::Action(PlayerInput::Check),
        "call" | "c" => ParseResult::Action(PlayerInput::Call),
        "allin" | "all-in" => ParseResult::Action(PlayerInput::AllIn),
        "bet" | "raise" => {
            let Some(raw) = parts.get(1) else {
                return ParseResult::Invalid(format!(
                    "{} requires an amount (e.g., '{} 100')",
                    command, command
                ));
            };
            match raw.parse::<u32>() {
                Ok(0) => ParseResult::Invalid("Amount must be positive".to_string()),
                Ok(amount) if command == "bet" => ParseResult::Action(PlayerInput::Bet(amount)),
                Ok(amount) => ParseResult::Action(PlayerInput::Raise(amount)),
                Err(_) => ParseResult::Invalid(format!("Invalid amount '{}'", raw)),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, bet <total>, raise <total>, allin, q",
            command
        )),
    }
}

/// Turns parsed input into a decision the engine will accept, or explains why not.
///
/// `bet` and `raise` are interchangeable here: whichever aggressive action is open
/// is used.
pub fn resolve_input(input: PlayerInput, req: &DecisionRequest) -> Result<Decision, String> {
    match input {
        PlayerInput::Fold => Ok(Decision::fold()),
        PlayerInput::Check if req.can(ActionKind::Check) => Ok(Decision::check()),
        PlayerInput::Check => Err(format!("Cannot check: {} to call", req.amount_to_call)),
        PlayerInput::Call if req.can(ActionKind::Call) => Ok(Decision::call()),
        PlayerInput::Call => Ok(Decision::check()),
        PlayerInput::AllIn => match req.aggressive_action() {
            Some(kind) => Ok(Decision::new(kind, req.all_in_total())),
            None if req.can(ActionKind::Call) => Ok(Decision::call()),
            None => Ok(Decision::check()),
        },
        PlayerInput::Bet(total) | PlayerInput::Raise(total) => {
            let Some(kind) = req.aggressive_action() else {
                return Err("Betting is closed for you; call, check or fold".to_string());
            };
            let max = req.all_in_total();
            if total > max {
                return Err(format!("You can put in at most {} this street", max));
            }
            if total < req.min_raise_to && total != max {
                return Err(format!(
                    "Minimum {} is to {}",
                    kind.as_str(),
                    req.min_raise_to
                ));
            }
            Ok(Decision::new(kind, total))
        }
    }
}
