//! Card, action and event formatters for terminal display.
//!
//! Pure functions; the console renderer and the human prompt decide where the text
//! goes. Suits use Unicode symbols where the terminal is likely to support them and
//! fall back to letters elsewhere.
//!
//! ## Example
//!
//! ```rust
//! use tablestakes_engine::cards::{Card, Rank, Suit};
//! use tablestakes_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use tablestakes_engine::cards::{Card, Rank, Suit};
use tablestakes_engine::events::{BlindKind, HandEvent};
use tablestakes_engine::player::ActionKind;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Single-character rank (2-9, T, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
    .to_string()
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Cards in bracket notation, `"[]"` when empty.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// An applied action as it reads at the table, e.g. `"raises to 60 (all-in)"`.
///
/// `amount` is what the action added; `total` is the street commitment afterwards.
///
/// ```rust
/// use tablestakes_engine::player::ActionKind;
/// # use tablestakes_cli::formatters::format_action;
///
/// assert_eq!(format_action(ActionKind::Fold, 0, 0, false), "folds");
/// assert_eq!(format_action(ActionKind::Call, 20, 40, false), "calls 20");
/// assert_eq!(format_action(ActionKind::Raise, 60, 60, true), "raises to 60 (all-in)");
/// ```
pub fn format_action(action: ActionKind, amount: u32, total: u32, all_in: bool) -> String {
    let text = match action {
        ActionKind::Fold => "folds".to_string(),
        ActionKind::Check => "checks".to_string(),
        ActionKind::Call => format!("calls {}", amount),
        ActionKind::Bet => format!("bets {}", total),
        ActionKind::Raise => format!("raises to {}", total),
    };
    if all_in {
        format!("{} (all-in)", text)
    } else {
        text
    }
}

/// Whose hole cards the renderer may show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Spectating bots: every seat's cards are shown as they are dealt.
    All,
    /// Only this seat's cards are shown before showdown.
    Seat(usize),
}

impl Visibility {
    fn shows(self, seat: usize) -> bool {
        match self {
            Visibility::All => true,
            Visibility::Seat(s) => s == seat,
        }
    }
}

/// Renders one event as zero or more lines of table text.
pub fn format_event(event: &HandEvent, visibility: Visibility) -> Option<String> {
    let text = match event {
        HandEvent::HandStarted {
            hand_no,
            button,
            stacks,
        } => format!(
            "Hand {} (button: seat {}) stacks: {}",
            hand_no,
            button,
            format_stacks(stacks)
        ),
        HandEvent::BlindPosted { seat, blind, amount } => {
            let kind = match blind {
                BlindKind::Small => "small",
                BlindKind::Big => "big",
            };
            format!("seat {} posts {} blind {}", seat, kind, amount)
        }
        HandEvent::HoleCardsDealt { seat, cards } => {
            if !visibility.shows(*seat) {
                return None;
            }
            format!("seat {} dealt {}", seat, format_board(cards))
        }
        HandEvent::CommunityDealt { stage, cards } => format!(
            "*** {} *** {}",
            stage.as_str().to_uppercase(),
            format_board(cards)
        ),
        HandEvent::ActionTaken {
            seat,
            action,
            amount,
            total,
            all_in,
            ..
        } => format!(
            "seat {}: {}",
            seat,
            format_action(*action, *amount, *total, *all_in)
        ),
        HandEvent::IllegalAction {
            seat,
            attempted,
            reason,
        } => format!(
            "seat {}: illegal {} ({}), folded",
            seat, attempted, reason
        ),
        HandEvent::RoundClosed { pot, .. } => format!("Pot: {}", pot),
        HandEvent::Showdown {
            seat,
            cards,
            strength,
        } => format!(
            "seat {} shows {} ({})",
            seat,
            format_board(cards),
            strength.category
        ),
        HandEvent::HandSettled { payouts, stacks, .. } => {
            let mut lines: Vec<String> = payouts
                .iter()
                .map(|(seat, amount)| format!("seat {} wins {}", seat, amount))
                .collect();
            lines.push(format!("Stacks: {}", format_stacks(stacks)));
            lines.join("\n")
        }
    };
    Some(text)
}

pub fn format_stacks(stacks: &[u32]) -> String {
    let parts: Vec<String> = stacks.iter().map(u32::to_string).collect();
    format!("[{}]", parts.join(", "))
}
