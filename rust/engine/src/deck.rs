use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A 52-card deck dealt from the front. Dealt cards leave the deck, so it can never
/// hand out a duplicate.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    /// Permutes the cards still in the deck. Dealt cards stay out.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the first `n` cards.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    pub fn deal_card(&mut self) -> Result<Card, GameError> {
        let mut dealt = self.deal(1)?;
        dealt.pop().ok_or(GameError::InsufficientCards {
            requested: 1,
            remaining: 0,
        })
    }

    /// Discards one card unseen, then deals `n`. Fails without touching the deck when
    /// fewer than `n + 1` cards remain.
    pub fn burn_and_deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if self.cards.len() < n + 1 {
            return Err(GameError::InsufficientCards {
                requested: n + 1,
                remaining: self.cards.len(),
            });
        }
        self.cards.remove(0);
        self.deal(n)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
