//! Command handler modules for the `tablestakes` CLI.
//!
//! Each subcommand lives in its own file with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers for that command only
//! - Output streams (`&mut dyn Write`) passed in, never taken from the process
//! - Errors propagated as `CliError`; [`crate::run`] prints them and picks the exit code
//!
//! # Example
//!
//! ```rust
//! use tablestakes_cli::commands::handle_rank_command;
//!
//! let mut out = Vec::new();
//! handle_rank_command(&["As Ks Qs Js Ts".to_string()], &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("Royal Flush"));
//! ```

pub mod cfg;
pub mod deal;
pub mod play;
pub mod rank;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::{PlayOptions, handle_play_command};
pub use rank::handle_rank_command;
pub use sim::{SimOptions, handle_sim_command};
