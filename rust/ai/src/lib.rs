//! # tablestakes-ai: Bot Players
//!
//! [`DecisionMaker`] implementations that can fill any seat at the table.
//!
//! ## Core Components
//!
//! - [`baseline`] - Rule-based bot using hand strength and pot odds
//! - [`random`] - Seeded coin-flip bot for simulations
//! - [`passive`] - Check/call bot
//! - [`create_ai`] - Factory by name
//!
//! ## Quick Start
//!
//! ```rust
//! use tablestakes_ai::create_ai;
//! use tablestakes_engine::decision::DecisionMaker;
//! use tablestakes_engine::engine::{Engine, TableConfig};
//!
//! let policies: Vec<Box<dyn DecisionMaker>> = (0..3)
//!     .map(|seat| create_ai("baseline", seat).unwrap())
//!     .collect();
//! let mut engine = Engine::new(TableConfig::new(3, 1000, 10, 20).with_seed(42), policies).unwrap();
//! let summary = engine.play_hand().unwrap();
//! assert_eq!(summary.stacks.iter().sum::<u32>(), 3000);
//! ```

use tablestakes_engine::decision::DecisionMaker;
use thiserror::Error;

pub mod baseline;
pub mod passive;
pub mod random;

pub use baseline::BaselineAI;
pub use passive::PassiveAI;
pub use random::RandomAI;

/// Names accepted by [`create_ai`].
pub const AI_NAMES: [&str; 3] = ["baseline", "random", "passive"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown AI type '{0}' (expected one of: baseline, random, passive)")]
pub struct UnknownAi(pub String);

/// Builds a bot by name. `seed` only matters for bots that use randomness.
///
/// # Example
///
/// ```rust
/// use tablestakes_ai::create_ai;
/// use tablestakes_engine::decision::DecisionMaker;
///
/// let ai = create_ai("baseline", 0).unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("shark", 0).is_err());
/// ```
pub fn create_ai(name: &str, seed: u64) -> Result<Box<dyn DecisionMaker>, UnknownAi> {
    match name.to_ascii_lowercase().as_str() {
        "baseline" => Ok(Box::new(BaselineAI::new())),
        "random" => Ok(Box::new(RandomAI::new(seed))),
        "passive" => Ok(Box::new(PassiveAI)),
        _ => Err(UnknownAi(name.to_string())),
    }
}
