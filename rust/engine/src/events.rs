//! The event interface: an ordered stream of what happened during a hand.
//!
//! Subscribers render or record these; the engine itself never formats output.

use serde::{Deserialize, Serialize};

use crate::betting::RoundClosure;
use crate::cards::Card;
use crate::game::Stage;
use crate::hand::HandStrength;
use crate::player::ActionKind;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlindKind {
    Small,
    Big,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HandEvent {
    HandStarted {
        hand_no: u64,
        button: usize,
        stacks: Vec<u32>,
    },
    BlindPosted {
        seat: usize,
        blind: BlindKind,
        amount: u32,
    },
    HoleCardsDealt {
        seat: usize,
        cards: [Card; 2],
    },
    CommunityDealt {
        stage: Stage,
        cards: Vec<Card>,
    },
    /// `amount` is what the action added to the pot; `total` is the seat's street
    /// commitment afterwards.
    ActionTaken {
        seat: usize,
        stage: Stage,
        action: ActionKind,
        amount: u32,
        total: u32,
        all_in: bool,
    },
    /// The decision was rejected and the seat was folded in its place.
    IllegalAction {
        seat: usize,
        attempted: ActionKind,
        reason: String,
    },
    RoundClosed {
        stage: Stage,
        closure: RoundClosure,
        pot: u32,
    },
    Showdown {
        seat: usize,
        cards: [Card; 2],
        strength: HandStrength,
    },
    HandSettled {
        payouts: Vec<(usize, u32)>,
        pot: u32,
        stacks: Vec<u32>,
    },
}

pub trait EventSink {
    fn emit(&mut self, event: &HandEvent);
}

/// Keeps every event in memory, in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<HandEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn events(&self) -> &[HandEvent] {
        &self.events
    }
    pub fn take(&mut self) -> Vec<HandEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: &HandEvent) {
        self.events.push(event.clone());
    }
}
