use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// The closed set of actions a decision can name.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

impl ActionKind {
    pub fn is_aggressive(self) -> bool {
        matches!(self, ActionKind::Bet | ActionKind::Raise)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Bet => "bet",
            ActionKind::Raise => "raise",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a seat stands in the current hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatStatus {
    /// Still in the hand and able to act.
    Active,
    Folded,
    /// Committed the whole stack; stays in the hand but never acts again.
    AllIn,
    /// Had no chips when the hand started.
    SittingOut,
}

/// Default starting stack size for each seat in chips
pub const STARTING_STACK: u32 = 1_000;

/// One seat's ledger: chips behind, chips committed this street and this hand,
/// hole cards and status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    seat: usize,
    stack: u32,
    committed: u32,
    contributed: u32,
    hole: [Option<Card>; 2],
    status: SeatStatus,
}

impl Player {
    pub fn new(seat: usize, stack: u32) -> Self {
        Self {
            seat,
            stack,
            committed: 0,
            contributed: 0,
            hole: [None, None],
            status: if stack > 0 {
                SeatStatus::Active
            } else {
                SeatStatus::SittingOut
            },
        }
    }

    pub fn seat(&self) -> usize {
        self.seat
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    /// Chips committed on the current street.
    pub fn committed(&self) -> u32 {
        self.committed
    }
    /// Chips committed over the whole hand.
    pub fn contributed(&self) -> u32 {
        self.contributed
    }
    pub fn status(&self) -> SeatStatus {
        self.status
    }

    pub fn is_folded(&self) -> bool {
        self.status == SeatStatus::Folded
    }
    pub fn is_all_in(&self) -> bool {
        self.status == SeatStatus::AllIn
    }
    /// Still contesting the pot (active or all-in).
    pub fn in_hand(&self) -> bool {
        matches!(self.status, SeatStatus::Active | SeatStatus::AllIn)
    }
    /// May be offered a turn.
    pub fn can_act(&self) -> bool {
        self.status == SeatStatus::Active
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    pub fn give_card(&mut self, c: Card) -> Result<(), String> {
        match self.hole.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(c);
                Ok(())
            }
            None => Err("Hole cards already full".to_string()),
        }
    }

    /// Moves up to `amount` chips from the stack into the street commitment and
    /// returns what was actually committed. Emptying the stack makes the seat all-in.
    pub fn place_bet(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.stack);
        self.stack -= actual;
        self.committed += actual;
        self.contributed += actual;
        if self.stack == 0 && self.contributed > 0 && self.status == SeatStatus::Active {
            self.status = SeatStatus::AllIn;
        }
        actual
    }

    /// Chips already committed stay in the pot.
    pub fn fold(&mut self) {
        if self.status == SeatStatus::Active {
            self.status = SeatStatus::Folded;
        }
    }

    pub fn award(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Clears cards and commitments for a new hand; a seat without chips sits out.
    pub fn reset_for_hand(&mut self) {
        self.hole = [None, None];
        self.committed = 0;
        self.contributed = 0;
        self.status = if self.stack > 0 {
            SeatStatus::Active
        } else {
            SeatStatus::SittingOut
        };
    }

    pub fn reset_street(&mut self) {
        self.committed = 0;
    }

    pub(crate) fn check_invariants(&self) -> Result<(), String> {
        let all_in = self.status == SeatStatus::AllIn;
        let drained = self.stack == 0 && self.contributed > 0;
        if all_in != drained {
            return Err(format!(
                "seat {} all-in flag {} but stack {} and hand contribution {}",
                self.seat, all_in, self.stack, self.contributed
            ));
        }
        if self.committed > self.contributed {
            return Err(format!(
                "seat {} street commitment {} exceeds hand contribution {}",
                self.seat, self.committed, self.contributed
            ));
        }
        Ok(())
    }
}
