//! One street of betting as an explicit state machine.
//!
//! A [`BettingRound`] starts `Idle`, becomes `Active` once [`BettingRound::open`] has
//! seated the first actor, and ends `Closed` with a [`RoundClosure`]. Every decision
//! goes through [`BettingRound::apply`], which validates it against the seat's legal
//! set, moves chips through [`GameState`], re-runs the closure check and advances the
//! turn.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::decision::{Decision, DecisionRequest};
use crate::errors::GameError;
use crate::game::{GameState, Stage};
use crate::player::{ActionKind, Player};
use crate::rules::{legal_actions, validate_action, TurnContext, ValidatedAction};

/// Why a round stopped taking actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundClosure {
    /// Everyone who had to respond did, and all live bets match.
    AllActed,
    /// Only this seat is left in the hand.
    DefaultWin(usize),
    /// Nobody could act when the round opened.
    NoActionNeeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Idle,
    Active,
    Closed(RoundClosure),
}

/// A decision that was rejected and turned into a fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalAttempt {
    pub attempted: ActionKind,
    pub reason: String,
}

/// What one call to [`BettingRound::apply`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub seat: usize,
    /// The action actually applied; `Fold` when the decision was illegal.
    pub action: ActionKind,
    /// Chips moved into the pot by this action.
    pub amount: u32,
    /// The seat's street commitment afterwards.
    pub total: u32,
    pub all_in: bool,
    pub illegal: Option<IllegalAttempt>,
    pub closure: Option<RoundClosure>,
}

#[derive(Debug, Clone)]
pub struct BettingRound {
    stage: Stage,
    phase: RoundPhase,
    current_bet_level: u32,
    current_actor: Option<usize>,
    last_aggressor: Option<usize>,
    actions_since_aggression: usize,
    min_actors_needed: usize,
    /// Seat of a big blind that has not yet used its preflop option.
    big_blind_option: Option<usize>,
}

impl BettingRound {
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            phase: RoundPhase::Idle,
            current_bet_level: 0,
            current_actor: None,
            last_aggressor: None,
            actions_since_aggression: 0,
            min_actors_needed: 0,
            big_blind_option: None,
        }
    }

    /// Opens the round against the current table. Preflop the blinds must already be
    /// posted and `big_blind_seat` names who posted the big one; postflop it is
    /// ignored and action starts left of the button.
    pub fn open(&mut self, state: &GameState, big_blind_seat: Option<usize>) -> Result<(), GameError> {
        if self.phase != RoundPhase::Idle {
            return Err(GameError::InvariantViolation(format!(
                "{} betting round opened twice",
                self.stage
            )));
        }

        let first_actor = if self.stage == Stage::Preflop {
            let bb = big_blind_seat.ok_or_else(|| {
                GameError::InvariantViolation("preflop round needs the big blind seat".into())
            })?;
            let posted = state.players().iter().map(Player::committed).max().unwrap_or(0);
            self.current_bet_level = state.big_blind().max(posted);
            if state.player(bb).can_act() {
                self.big_blind_option = Some(bb);
            }
            state.seat_after(bb, Player::can_act)
        } else {
            self.current_bet_level = 0;
            let button = state
                .button()
                .ok_or_else(|| GameError::Configuration("button has not been placed".into()))?;
            state.seat_after(button, Player::can_act)
        };

        self.min_actors_needed = state.actable_seats().len();
        self.current_actor = first_actor;
        self.phase = RoundPhase::Active;

        if let Some(closure) = self.opening_closure(state) {
            self.close(closure);
        }
        debug!(
            stage = %self.stage,
            level = self.current_bet_level,
            first_actor = ?self.current_actor,
            min_actors = self.min_actors_needed,
            "betting round opened"
        );
        Ok(())
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }
    pub fn is_closed(&self) -> bool {
        matches!(self.phase, RoundPhase::Closed(_))
    }
    pub fn closure(&self) -> Option<RoundClosure> {
        match self.phase {
            RoundPhase::Closed(c) => Some(c),
            _ => None,
        }
    }
    pub fn current_actor(&self) -> Option<usize> {
        self.current_actor
    }
    pub fn current_bet_level(&self) -> u32 {
        self.current_bet_level
    }
    pub fn last_aggressor(&self) -> Option<usize> {
        self.last_aggressor
    }
    pub fn actions_since_aggression(&self) -> usize {
        self.actions_since_aggression
    }
    pub fn min_actors_needed(&self) -> usize {
        self.min_actors_needed
    }
    pub fn big_blind_option(&self) -> Option<usize> {
        self.big_blind_option
    }

    pub fn turn_context(&self, state: &GameState, seat: usize) -> TurnContext {
        let p = state.player(seat);
        TurnContext {
            seat,
            stack: p.stack(),
            committed: p.committed(),
            current_bet_level: self.current_bet_level,
            big_blind: state.big_blind(),
        }
    }

    /// The request to hand to the current actor's policy, or `None` once closed.
    pub fn decision_request(&self, state: &GameState) -> Option<DecisionRequest> {
        if self.phase != RoundPhase::Active {
            return None;
        }
        let seat = self.current_actor?;
        let ctx = self.turn_context(state, seat);
        let player = state.player(seat);
        Some(DecisionRequest {
            seat,
            legal_actions: legal_actions(&ctx),
            amount_to_call: ctx.to_call(),
            current_bet_level: self.current_bet_level,
            min_raise_to: ctx.min_raise_to(),
            street: self.stage,
            stack: player.stack(),
            committed: player.committed(),
            pot: state.pot(),
            big_blind: state.big_blind(),
            hole_cards: player.hole_cards().iter().flatten().copied().collect(),
            board: state.board().to_vec(),
        })
    }

    /// Applies `decision` for `seat`.
    ///
    /// An illegal decision folds the seat and is reported in
    /// [`ActionOutcome::illegal`]; it is not an error.
    ///
    /// # Errors
    ///
    /// - [`GameError::HandAlreadyComplete`] when the round is not active.
    /// - [`GameError::NotPlayersTurn`] when `seat` is not the current actor.
    /// - [`GameError::InvariantViolation`] if the ledger check fails.
    pub fn apply(
        &mut self,
        state: &mut GameState,
        seat: usize,
        decision: Decision,
    ) -> Result<ActionOutcome, GameError> {
        if self.phase != RoundPhase::Active {
            return Err(GameError::HandAlreadyComplete);
        }
        let expected = self.current_actor.ok_or(GameError::HandAlreadyComplete)?;
        if seat != expected {
            return Err(GameError::NotPlayersTurn {
                expected,
                actual: seat,
            });
        }

        let ctx = self.turn_context(state, seat);
        let mut illegal = None;
        let (action, amount) = match validate_action(&ctx, decision) {
            Ok(ValidatedAction::Fold) => {
                state.fold(seat)?;
                self.actions_since_aggression += 1;
                (ActionKind::Fold, 0)
            }
            Ok(ValidatedAction::Check) => {
                self.actions_since_aggression += 1;
                (ActionKind::Check, 0)
            }
            Ok(ValidatedAction::Call(chips)) => {
                let added = state.place_bet(seat, chips)?;
                self.actions_since_aggression += 1;
                (ActionKind::Call, added)
            }
            Ok(ValidatedAction::Raise { to, .. }) => {
                let kind = if self.current_bet_level == 0 {
                    ActionKind::Bet
                } else {
                    ActionKind::Raise
                };
                let added = state.place_bet(seat, to - ctx.committed)?;
                self.current_bet_level = state.player(seat).committed();
                self.last_aggressor = Some(seat);
                self.actions_since_aggression = 0;
                self.min_actors_needed = state
                    .actable_seats()
                    .into_iter()
                    .filter(|&s| s != seat)
                    .count();
                self.big_blind_option = None;
                (kind, added)
            }
            Err(GameError::IllegalAction { reason, .. }) => {
                warn!(
                    seat,
                    attempted = %decision.action,
                    total = decision.total_bet,
                    %reason,
                    "illegal action, folding seat"
                );
                state.fold(seat)?;
                self.actions_since_aggression += 1;
                illegal = Some(IllegalAttempt {
                    attempted: decision.action,
                    reason,
                });
                (ActionKind::Fold, 0)
            }
            Err(e) => return Err(e),
        };

        if self.big_blind_option == Some(seat) {
            self.big_blind_option = None;
        }

        let player = state.player(seat);
        let mut outcome = ActionOutcome {
            seat,
            action,
            amount,
            total: player.committed(),
            all_in: player.is_all_in(),
            illegal,
            closure: None,
        };
        debug!(
            stage = %self.stage,
            seat,
            action = %action,
            amount,
            level = self.current_bet_level,
            since_aggression = self.actions_since_aggression,
            min_actors = self.min_actors_needed,
            "action applied"
        );

        if let Some(closure) = self.closure_after_action(state) {
            self.close(closure);
            outcome.closure = Some(closure);
            return Ok(outcome);
        }

        match state.seat_after(seat, Player::can_act) {
            Some(next) => self.current_actor = Some(next),
            None => {
                self.close(RoundClosure::AllActed);
                outcome.closure = Some(RoundClosure::AllActed);
            }
        }
        Ok(outcome)
    }

    fn close(&mut self, closure: RoundClosure) {
        self.phase = RoundPhase::Closed(closure);
        self.current_actor = None;
        self.big_blind_option = None;
        debug!(stage = %self.stage, ?closure, "betting round closed");
    }

    fn opening_closure(&self, state: &GameState) -> Option<RoundClosure> {
        let in_hand = state.seats_in_hand();
        if in_hand.len() < 2 {
            return in_hand.first().map(|&s| RoundClosure::DefaultWin(s));
        }
        let actable = state.actable_seats();
        match actable.as_slice() {
            [] => Some(RoundClosure::NoActionNeeded),
            [only] if state.player(*only).committed() >= self.current_bet_level => {
                Some(RoundClosure::NoActionNeeded)
            }
            _ => None,
        }
    }

    fn closure_after_action(&self, state: &GameState) -> Option<RoundClosure> {
        let in_hand = state.seats_in_hand();
        if in_hand.len() < 2 {
            return in_hand.first().map(|&s| RoundClosure::DefaultWin(s));
        }
        if self.big_blind_option.is_some() {
            return None;
        }
        let matched = state
            .players()
            .iter()
            .filter(|p| p.can_act())
            .all(|p| p.committed() == self.current_bet_level);
        if self.actions_since_aggression >= self.min_actors_needed && matched {
            Some(RoundClosure::AllActed)
        } else {
            None
        }
    }
}
