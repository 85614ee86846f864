use tablestakes_engine::decision::{Decision, DecisionMaker, DecisionRequest};
use tablestakes_engine::player::ActionKind;

/// Never bets or folds: checks when it can, calls otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassiveAI;

impl DecisionMaker for PassiveAI {
    fn decide(&mut self, req: &DecisionRequest) -> Decision {
        if req.can(ActionKind::Check) {
            Decision::check()
        } else {
            Decision::call()
        }
    }

    fn name(&self) -> &str {
        "PassiveAI"
    }
}
