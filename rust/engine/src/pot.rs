use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// The single main pot of a hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    amount: u32,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn add(&mut self, chips: u32) -> Result<(), GameError> {
        self.amount = self.amount.checked_add(chips).ok_or_else(|| {
            GameError::InvariantViolation(format!(
                "pot of {} cannot take {} more chips",
                self.amount, chips
            ))
        })?;
        Ok(())
    }

    /// Empties the pot and returns what it held.
    pub fn take(&mut self) -> u32 {
        std::mem::take(&mut self.amount)
    }
}

/// Splits `amount` between `winners`, which must already be ordered starting left of
/// the button. Every winner gets an equal share; the first one also receives the
/// indivisible remainder.
pub fn split_pot(amount: u32, winners: &[usize]) -> Vec<(usize, u32)> {
    if winners.is_empty() {
        return Vec::new();
    }
    let n = winners.len() as u32;
    let share = amount / n;
    let odd = amount % n;
    winners
        .iter()
        .enumerate()
        .map(|(i, &seat)| (seat, if i == 0 { share + odd } else { share }))
        .collect()
}
