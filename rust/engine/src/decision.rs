//! The decision interface: how the engine asks a seat what it wants to do.
//!
//! The engine treats every [`DecisionMaker`] the same way, whether it prompts a human,
//! runs a bot, or replays a script. Policies are handed to [`crate::engine::Engine`]
//! at construction time, one per seat.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Stage;
use crate::player::ActionKind;

/// A seat's answer: the action and the street total it intends to reach.
///
/// `total_bet` only matters for bets and raises; for the other actions it is
/// informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub action: ActionKind,
    pub total_bet: u32,
}

impl Decision {
    pub fn new(action: ActionKind, total_bet: u32) -> Self {
        Self { action, total_bet }
    }
    pub fn fold() -> Self {
        Self::new(ActionKind::Fold, 0)
    }
    pub fn check() -> Self {
        Self::new(ActionKind::Check, 0)
    }
    pub fn call() -> Self {
        Self::new(ActionKind::Call, 0)
    }
    pub fn bet(total: u32) -> Self {
        Self::new(ActionKind::Bet, total)
    }
    pub fn raise(total: u32) -> Self {
        Self::new(ActionKind::Raise, total)
    }
}

/// Everything a policy may look at when it is asked to act.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionRequest {
    pub seat: usize,
    pub legal_actions: Vec<ActionKind>,
    pub amount_to_call: u32,
    pub current_bet_level: u32,
    /// Smallest legal raise total (the all-in total when the stack is shorter).
    pub min_raise_to: u32,
    pub street: Stage,
    pub stack: u32,
    pub committed: u32,
    pub pot: u32,
    pub big_blind: u32,
    pub hole_cards: Vec<Card>,
    pub board: Vec<Card>,
}

impl DecisionRequest {
    pub fn can(&self, action: ActionKind) -> bool {
        self.legal_actions.contains(&action)
    }

    /// The aggressive action available to this seat, if any.
    pub fn aggressive_action(&self) -> Option<ActionKind> {
        [ActionKind::Bet, ActionKind::Raise]
            .into_iter()
            .find(|a| self.can(*a))
    }

    /// Street total when shoving.
    pub fn all_in_total(&self) -> u32 {
        self.committed + self.stack
    }
}

/// A capability that picks an action for a seat. Called once per turn; the engine
/// blocks until it returns.
pub trait DecisionMaker {
    fn decide(&mut self, request: &DecisionRequest) -> Decision;

    fn name(&self) -> &str;
}

/// Replays a fixed queue of decisions. Once the queue runs dry it checks when it can
/// and folds otherwise.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPolicy {
    script: VecDeque<Decision>,
}

impl ScriptedPolicy {
    pub fn new(script: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DecisionMaker for ScriptedPolicy {
    fn decide(&mut self, request: &DecisionRequest) -> Decision {
        match self.script.pop_front() {
            Some(decision) => decision,
            None if request.can(ActionKind::Check) => Decision::check(),
            None => Decision::fold(),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
