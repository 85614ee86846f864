//! Rank command handler: names the best five-card hand among 5 to 7 cards.

use crate::error::CliError;
use crate::formatters::{format_board, format_rank};
use std::io::Write;
use tablestakes_engine::cards::{Rank, parse_cards};
use tablestakes_engine::hand::evaluate_hand;

/// Handle the rank command.
///
/// `cards` may be one argument per card or a single quoted list; both are joined and
/// parsed together (`"As"`, `"10h"` and `"A♠"` all work).
pub fn handle_rank_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let parsed = parse_cards(&cards.join(" "))?;
    let strength = evaluate_hand(&parsed)?;

    let tiebreak: Vec<String> = strength
        .tiebreak
        .iter()
        .map(|&v| Rank::from_value(v).map_or_else(|| v.to_string(), |r| format_rank(&r)))
        .collect();

    writeln!(out, "Cards: {}", format_board(&parsed))?;
    writeln!(out, "Hand: {}", strength.category)?;
    writeln!(out, "Tiebreak: {}", tiebreak.join(" "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(input: &[&str]) -> Result<String, CliError> {
        let mut out = Vec::new();
        let args: Vec<String> = input.iter().map(|s| s.to_string()).collect();
        handle_rank_command(&args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn wheel_is_five_high_straight() {
        let output = rank(&["As", "2s", "3d", "4h", "5c", "9s", "Kh"]).unwrap();
        assert!(output.contains("Hand: Straight\n"));
        assert!(output.contains("Tiebreak: 5\n"));
    }

    #[test]
    fn accepts_a_single_quoted_list() {
        let output = rank(&["Kc Kd 9h 9s 8c 8d 2h"]).unwrap();
        assert!(output.contains("Hand: Two Pair"));
        assert!(output.contains("Tiebreak: K 9 8"));
    }

    #[test]
    fn too_few_cards_is_an_engine_error() {
        let err = rank(&["As", "Ks"]).unwrap_err();
        assert!(matches!(err, CliError::Engine(_)));
    }

    #[test]
    fn garbage_card_is_rejected() {
        assert!(rank(&["As", "Ks", "Qs", "Js", "Zz"]).is_err());
    }
}
