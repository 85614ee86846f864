//! Deal command handler: one hand's hole cards and board, no betting.
//!
//! The same seed always produces the same output.

use crate::error::CliError;
use crate::formatters::format_board;
use std::io::Write;
use tablestakes_engine::cards::Card;
use tablestakes_engine::deck::Deck;

/// Handle the deal command.
///
/// Hole cards go out one at a time around the table from seat 0, twice; the flop,
/// turn and river each follow a burn.
///
/// ```ignore
/// // Internal command handler
/// use tablestakes_cli::commands::deal::handle_deal_command;
/// let mut out = Vec::new();
/// handle_deal_command(Some(42), 3, &mut out).unwrap();
/// ```
pub fn handle_deal_command(
    seed: Option<u64>,
    players: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();

    let mut hole: Vec<Vec<Card>> = vec![Vec::with_capacity(2); players];
    for _ in 0..2 {
        for cards in hole.iter_mut() {
            cards.push(deck.deal_card()?);
        }
    }

    let mut board = deck.burn_and_deal(3)?;
    board.extend(deck.burn_and_deal(1)?);
    board.extend(deck.burn_and_deal(1)?);

    writeln!(out, "Seed: {}", seed)?;
    for (seat, cards) in hole.iter().enumerate() {
        writeln!(out, "Hole seat {}: {}", seat, format_board(cards))?;
    }
    writeln!(out, "Board: {}", format_board(&board))?;
    Ok(())
}
