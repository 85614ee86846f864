//! Seeded coin-flip bot for simulations.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tablestakes_engine::decision::{Decision, DecisionMaker, DecisionRequest};
use tablestakes_engine::player::ActionKind;

const OPEN_BET_PROBABILITY: f64 = 0.30;
const RAISE_PROBABILITY: f64 = 0.15;
const CALL_PROBABILITY: f64 = 0.85;

/// Ignores its cards. Checked to, it opens for one big blind 30% of the time; facing a
/// bet it min-raises 15% of the time and otherwise calls 85% of the time, folding the
/// rest. A stack that cannot cover the call calls all-in.
#[derive(Debug, Clone)]
pub struct RandomAI {
    rng: ChaCha20Rng,
}

impl RandomAI {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl DecisionMaker for RandomAI {
    fn decide(&mut self, req: &DecisionRequest) -> Decision {
        if req.amount_to_call == 0 {
            let can_open = req.current_bet_level == 0
                && req.can(ActionKind::Bet)
                && req.stack >= req.big_blind;
            if can_open && self.rng.random_bool(OPEN_BET_PROBABILITY) {
                return Decision::bet(req.big_blind);
            }
            return Decision::check();
        }

        let raise_cost = req.min_raise_to.saturating_sub(req.committed);
        if req.can(ActionKind::Raise)
            && req.stack >= raise_cost
            && self.rng.random_bool(RAISE_PROBABILITY)
        {
            return Decision::raise(req.min_raise_to);
        }

        if req.stack < req.amount_to_call || self.rng.random_bool(CALL_PROBABILITY) {
            Decision::call()
        } else {
            Decision::fold()
        }
    }

    fn name(&self) -> &str {
        "RandomAI"
    }
}
