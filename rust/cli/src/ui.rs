//! UI helper functions for terminal output formatting.

use std::io::Write;

/// Writes an error line with the "Error:" prefix.
pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Warns when a session stopped before reaching the requested hand count.
pub fn warn_session_cut_short(
    err: &mut dyn Write,
    played: u64,
    requested: u64,
) -> std::io::Result<()> {
    if played < requested {
        display_warning(
            err,
            &format!(
                "stopped after {} of {} hands: fewer than two players have chips",
                played, requested
            ),
        )?;
    }
    Ok(())
}
