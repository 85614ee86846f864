//! Rule-based bot: hole-card strength preflop, made-hand strength postflop, pot odds
//! when facing a bet. Deterministic; the same request always gets the same answer.

use tablestakes_engine::cards::Card;
use tablestakes_engine::decision::{Decision, DecisionMaker, DecisionRequest};
use tablestakes_engine::game::Stage;
use tablestakes_engine::hand::{evaluate_with_board, Category};
use tablestakes_engine::player::ActionKind;

/// Plays a fixed strength-threshold strategy.
///
/// Strengths run 0-10. Premium holdings (9-10) bet and raise, strong ones (7-8) bet
/// when checked to and call otherwise, medium and marginal ones call only at a good
/// price, and everything else folds to a bet.
///
/// # Example
///
/// ```rust
/// use tablestakes_ai::baseline::BaselineAI;
/// use tablestakes_engine::decision::DecisionMaker;
///
/// let ai = BaselineAI::new();
/// assert_eq!(ai.name(), "BaselineAI");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }

    /// 0-10 rating of two hole cards.
    fn preflop_strength(hole: [Card; 2]) -> u8 {
        let (r1, r2) = (hole[0].rank.value(), hole[1].rank.value());
        let (high, low) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };
        let suited = hole[0].suit == hole[1].suit;

        if high == low {
            return match high {
                13..=14 => 10,
                11..=12 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        // (suited, offsuit)
        let (s, o) = match (high, low) {
            (14, 13) => (10, 8),
            (14, 12) => (8, 7),
            (14, 11) => (7, 6),
            (14, 10) => (6, 5),
            (14, _) => (5, 4),
            (13, 12) => (7, 6),
            (13, 11) => (6, 5),
            (13, 10) => (5, 4),
            (12, 11) => (6, 5),
            (12, 10) => (5, 4),
            _ if high - low <= 2 => (
                if high >= 9 { 5 } else { 4 },
                if high >= 11 && low >= 9 { 4 } else { 2 },
            ),
            _ if high >= 11 && low >= 9 => (4, 4),
            _ => (2, 2),
        };
        if suited { s } else { o }
    }

    /// 0-10 rating of the best hand with the board; `None` before the flop.
    fn postflop_strength(hole: [Card; 2], board: &[Card]) -> Option<u8> {
        let strength = evaluate_with_board(&hole, board).ok()?;
        let base = match strength.category {
            Category::HighCard => 1,
            Category::OnePair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush | Category::RoyalFlush => 10,
        };
        let kicker_boost = u8::from(strength.tiebreak.first().is_some_and(|&r| r >= 12));
        Some((base + kicker_boost).min(10))
    }

    /// Share of the final pot already in the middle when calling.
    fn pot_odds(pot: u32, to_call: u32) -> f32 {
        if to_call == 0 {
            return 1.0;
        }
        pot as f32 / (pot + to_call) as f32
    }

    /// A bet or raise to `level + size`, never below the minimum and never above the
    /// stack. `None` when no aggressive action is open.
    fn aggressive(req: &DecisionRequest, size: u32) -> Option<Decision> {
        let kind = req.aggressive_action()?;
        let target = (req.current_bet_level + size)
            .max(req.min_raise_to)
            .min(req.all_in_total());
        Some(Decision::new(kind, target))
    }

    fn strength(req: &DecisionRequest, hole: [Card; 2]) -> u8 {
        if req.street == Stage::Preflop {
            Self::preflop_strength(hole)
        } else {
            Self::postflop_strength(hole, &req.board).unwrap_or_else(|| Self::preflop_strength(hole))
        }
    }

    fn choose(strength: u8, req: &DecisionRequest) -> Decision {
        let to_call = req.amount_to_call;
        let pot = req.pot;

        if to_call == 0 {
            let sizing = match strength {
                9..=10 => Some(pot * 2 / 3),
                7..=8 => Some(pot / 2),
                _ => None,
            };
            return sizing
                .and_then(|size| Self::aggressive(req, size.max(req.big_blind)))
                .unwrap_or_else(Decision::check);
        }

        // Calling puts the whole stack in.
        if to_call >= req.stack {
            return if strength >= 7 { Decision::call() } else { Decision::fold() };
        }

        let odds = Self::pot_odds(pot, to_call);
        match strength {
            9..=10 => Self::aggressive(req, (pot / 2).max(req.big_blind)).unwrap_or_else(Decision::call),
            7..=8 => Decision::call(),
            5..=6 if odds >= 0.3 || to_call <= pot / 4 => Decision::call(),
            3..=4 if odds >= 0.4 || to_call <= pot / 6 => Decision::call(),
            _ => Decision::fold(),
        }
    }
}

impl DecisionMaker for BaselineAI {
    fn decide(&mut self, req: &DecisionRequest) -> Decision {
        let hole = match req.hole_cards.as_slice() {
            [a, b] => [*a, *b],
            _ if req.can(ActionKind::Check) => return Decision::check(),
            _ => return Decision::fold(),
        };
        Self::choose(Self::strength(req, hole), req)
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablestakes_engine::cards::parse_cards;

    fn hole(s: &str) -> [Card; 2] {
        let cards = parse_cards(s).unwrap();
        [cards[0], cards[1]]
    }

    fn request(hole_cards: &str, board: &str, level: u32, committed: u32, pot: u32) -> DecisionRequest {
        let stack = 1000;
        let to_call = level.saturating_sub(committed);
        let mut legal = vec![ActionKind::Fold];
        legal.push(if to_call == 0 { ActionKind::Check } else { ActionKind::Call });
        legal.push(if level == 0 { ActionKind::Bet } else { ActionKind::Raise });
        let board = if board.is_empty() { Vec::new() } else { parse_cards(board).unwrap() };
        DecisionRequest {
            seat: 0,
            legal_actions: legal,
            amount_to_call: to_call,
            current_bet_level: level,
            min_raise_to: level + 20,
            street: match board.len() {
                0 => Stage::Preflop,
                3 => Stage::Flop,
                4 => Stage::Turn,
                _ => Stage::River,
            },
            stack,
            committed,
            pot,
            big_blind: 20,
            hole_cards: parse_cards(hole_cards).unwrap(),
            board,
        }
    }

    #[test]
    fn preflop_strength_premium_pairs() {
        assert_eq!(BaselineAI::preflop_strength(hole("Ah As")), 10);
        assert_eq!(BaselineAI::preflop_strength(hole("Kh Ks")), 10);
        assert_eq!(BaselineAI::preflop_strength(hole("2h 2s")), 4);
    }

    #[test]
    fn preflop_strength_ace_king() {
        assert_eq!(BaselineAI::preflop_strength(hole("Ah Kh")), 10);
        assert_eq!(BaselineAI::preflop_strength(hole("Ah Ks")), 8);
    }

    #[test]
    fn preflop_strength_weak_hands() {
        assert!(BaselineAI::preflop_strength(hole("7h 2s")) <= 3);
        assert!((4..=6).contains(&BaselineAI::preflop_strength(hole("9h 8h"))));
    }

    #[test]
    fn pot_odds_calculation() {
        assert!((BaselineAI::pot_odds(100, 50) - 0.667).abs() < 0.01);
        assert_eq!(BaselineAI::pot_odds(100, 0), 1.0);
    }

    #[test]
    fn postflop_strength_uses_real_board_only() {
        let flop = parse_cards("Ad Kc Qh").unwrap();
        let s = BaselineAI::postflop_strength(hole("Ah As"), &flop).unwrap();
        assert!(s >= 6);
        assert_eq!(BaselineAI::postflop_strength(hole("Ah As"), &[]), None);
    }

    #[test]
    fn premium_hand_raises_preflop() {
        let mut ai = BaselineAI::new();
        let d = ai.decide(&request("Ah Ad", "", 20, 0, 30));
        assert_eq!(d.action, ActionKind::Raise);
        assert!(d.total_bet >= 40);
    }

    #[test]
    fn trash_folds_to_a_bet_and_checks_when_free() {
        let mut ai = BaselineAI::new();
        assert_eq!(ai.decide(&request("7h 2s", "", 20, 0, 30)), Decision::fold());
        assert_eq!(ai.decide(&request("7h 2s", "", 20, 20, 40)), Decision::check());
    }

    #[test]
    fn made_straight_bets_when_checked_to() {
        let mut ai = BaselineAI::new();
        let d = ai.decide(&request("9h 8d", "7c 6s 5h", 0, 0, 100));
        assert_eq!(d.action, ActionKind::Bet);
        assert_eq!(d.total_bet, 50);
    }

    #[test]
    fn missing_hole_cards_check_or_fold() {
        let mut ai = BaselineAI::new();
        let mut req = request("Ah Ad", "", 20, 0, 30);
        req.hole_cards.clear();
        assert_eq!(ai.decide(&req), Decision::fold());
    }
}
