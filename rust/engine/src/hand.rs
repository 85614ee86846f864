use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category plus the significant rank values, high to low. Ordering compares the
/// category first, then the tiebreak sequence element by element.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    pub tiebreak: Vec<u8>,
}

impl HandStrength {
    fn new(category: Category, tiebreak: Vec<u8>) -> Self {
        Self { category, tiebreak }
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.category, self.tiebreak)
    }
}

/// Ranks the best five-card hand among 5 to 7 cards.
///
/// # Examples
///
/// ```
/// use tablestakes_engine::cards::parse_cards;
/// use tablestakes_engine::hand::{evaluate_hand, Category};
///
/// let cards = parse_cards("As 2s 3d 4h 5c 9s Kh").unwrap();
/// let strength = evaluate_hand(&cards).unwrap();
/// assert_eq!(strength.category, Category::Straight);
/// assert_eq!(strength.tiebreak, vec![5]);
/// ```
pub fn evaluate_hand(cards: &[Card]) -> Result<HandStrength, GameError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(GameError::InvalidCardCount(cards.len()));
    }

    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut by_suit: [Vec<u8>; 4] = Default::default();
    for c in cards {
        let r = c.rank.value();
        rank_counts[r as usize] += 1;
        by_suit[c.suit.index()].push(r);
    }

    let flush_suit = by_suit.iter().position(|ranks| ranks.len() >= 5);

    if let Some(s) = flush_suit {
        if let Some(high) = straight_high(&by_suit[s]) {
            let category = if high == 14 {
                Category::RoyalFlush
            } else {
                Category::StraightFlush
            };
            return Ok(HandStrength::new(category, vec![high]));
        }
    }

    // (count, rank), largest groups first, higher rank first within a size
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));
    let (top_count, top_rank) = groups[0];
    let second = groups.get(1).copied().unwrap_or((0, 0));

    if top_count == 4 {
        return Ok(HandStrength::new(
            Category::FourOfAKind,
            [vec![top_rank], kickers(&rank_counts, &[top_rank], 1)].concat(),
        ));
    }

    if top_count == 3 && second.0 >= 2 {
        return Ok(HandStrength::new(Category::FullHouse, vec![top_rank, second.1]));
    }

    if let Some(s) = flush_suit {
        let mut ranks = by_suit[s].clone();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        ranks.truncate(5);
        return Ok(HandStrength::new(Category::Flush, ranks));
    }

    let all: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    if let Some(high) = straight_high(&all) {
        return Ok(HandStrength::new(Category::Straight, vec![high]));
    }

    if top_count == 3 {
        return Ok(HandStrength::new(
            Category::ThreeOfAKind,
            [vec![top_rank], kickers(&rank_counts, &[top_rank], 2)].concat(),
        ));
    }

    if top_count == 2 && second.0 == 2 {
        let (high, low) = (top_rank, second.1);
        return Ok(HandStrength::new(
            Category::TwoPair,
            [vec![high, low], kickers(&rank_counts, &[high, low], 1)].concat(),
        ));
    }

    if top_count == 2 {
        return Ok(HandStrength::new(
            Category::OnePair,
            [vec![top_rank], kickers(&rank_counts, &[top_rank], 3)].concat(),
        ));
    }

    Ok(HandStrength::new(
        Category::HighCard,
        kickers(&rank_counts, &[], 5),
    ))
}

/// Ranks hole cards together with whatever board is out.
pub fn evaluate_with_board(hole: &[Card], board: &[Card]) -> Result<HandStrength, GameError> {
    let cards: Vec<Card> = hole.iter().chain(board).copied().collect();
    evaluate_hand(&cards)
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    a.cmp(b)
}

/// High card of the best five-long run, scanning the sorted distinct values. An Ace
/// also plays below the Two, so the wheel reports 5.
fn straight_high(ranks: &[u8]) -> Option<u8> {
    let mut uniq = ranks.to_vec();
    uniq.sort_unstable();
    uniq.dedup();
    if uniq.last() == Some(&14) {
        uniq.insert(0, 1);
    }

    let mut run = 1;
    let mut best = None;
    for w in uniq.windows(2) {
        if w[1] == w[0] + 1 {
            run += 1;
            if run >= 5 {
                best = Some(w[1]);
            }
        } else {
            run = 1;
        }
    }
    best
}

/// The `n` highest ranks present, skipping `exclude`.
fn kickers(rank_counts: &[u8; 15], exclude: &[u8], n: usize) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|r| rank_counts[*r as usize] > 0 && !exclude.contains(r))
        .take(n)
        .collect()
}
