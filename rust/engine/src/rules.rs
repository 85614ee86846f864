use crate::decision::Decision;
use crate::errors::GameError;
use crate::player::ActionKind;

/// What a seat faces when its turn comes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnContext {
    pub seat: usize,
    pub stack: u32,
    pub committed: u32,
    pub current_bet_level: u32,
    pub big_blind: u32,
}

impl TurnContext {
    pub fn to_call(&self) -> u32 {
        self.current_bet_level.saturating_sub(self.committed)
    }

    /// Street total if the seat shoves.
    pub fn max_total(&self) -> u32 {
        self.committed.saturating_add(self.stack)
    }

    /// Smallest legal raise total, capped at the all-in total.
    pub fn min_raise_to(&self) -> u32 {
        self.full_raise_to().min(self.max_total())
    }

    /// Level plus one big blind, ignoring the stack.
    fn full_raise_to(&self) -> u32 {
        self.current_bet_level.saturating_add(self.big_blind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips to add; less than `to_call` for a short all-in call.
    Call(u32),
    /// New street total for the seat.
    Raise { to: u32, all_in: bool },
}

/// The actions `ctx.seat` may choose from.
pub fn legal_actions(ctx: &TurnContext) -> Vec<ActionKind> {
    let mut actions = vec![ActionKind::Fold];
    if ctx.to_call() == 0 {
        actions.push(ActionKind::Check);
    } else {
        actions.push(ActionKind::Call);
    }
    if ctx.max_total() > ctx.current_bet_level {
        if ctx.current_bet_level == 0 {
            actions.push(ActionKind::Bet);
        } else {
            actions.push(ActionKind::Raise);
        }
    }
    actions
}

/// Validates a decision against the seat's situation.
///
/// A call with nothing owed is taken as a check.
///
/// Bet and raise are one transition: a request is judged by its total only. A total
/// above the stack is clamped to the all-in total, and an all-in for less than the
/// minimum increment still counts as a raise when it tops the current level.
///
/// # Errors
///
/// [`GameError::IllegalAction`] when the decision is outside the legal set, e.g. a
/// check while facing a bet or a raise below `current_bet_level + big_blind`.
///
/// # Examples
///
/// ```
/// use tablestakes_engine::decision::Decision;
/// use tablestakes_engine::player::ActionKind;
/// use tablestakes_engine::rules::{validate_action, TurnContext, ValidatedAction};
///
/// let ctx = TurnContext { seat: 0, stack: 30, committed: 0, current_bet_level: 50, big_blind: 20 };
/// let call = validate_action(&ctx, Decision::new(ActionKind::Call, 50)).unwrap();
/// assert_eq!(call, ValidatedAction::Call(30));
/// assert!(validate_action(&ctx, Decision::new(ActionKind::Check, 0)).is_err());
/// ```
pub fn validate_action(ctx: &TurnContext, decision: Decision) -> Result<ValidatedAction, GameError> {
    let illegal = |reason: String| GameError::IllegalAction {
        seat: ctx.seat,
        reason,
    };
    let to_call = ctx.to_call();
    match decision.action {
        ActionKind::Fold => Ok(ValidatedAction::Fold),
        ActionKind::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(illegal(format!("cannot check facing {} to call", to_call)))
            }
        }
        ActionKind::Call if to_call == 0 => Ok(ValidatedAction::Check),
        ActionKind::Call => Ok(ValidatedAction::Call(to_call.min(ctx.stack))),
        ActionKind::Bet | ActionKind::Raise => {
            let max_total = ctx.max_total();
            if max_total <= ctx.current_bet_level {
                return Err(illegal(format!(
                    "stack of {} cannot raise over {}",
                    ctx.stack, ctx.current_bet_level
                )));
            }
            let target = decision.total_bet.min(max_total);
            let all_in = target == max_total;
            if target >= ctx.full_raise_to() || (all_in && target > ctx.current_bet_level) {
                Ok(ValidatedAction::Raise { to: target, all_in })
            } else {
                Err(illegal(format!(
                    "{} to {} is below the minimum of {}",
                    decision.action,
                    decision.total_bet,
                    ctx.full_raise_to()
                )))
            }
        }
    }
}
