//! `passvault strength` — score a credential without storing it.

use std::io::{self, IsTerminal, Read};

use crate::cli::output;
use crate::errors::{PassVaultError, Result};
use crate::strength;

/// Execute the `strength` command.
pub fn execute(credential: Option<&str>) -> Result<()> {
    let value = if let Some(v) = credential {
        v.to_string()
    } else if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf.trim_end().to_string()
    } else {
        dialoguer::Password::new()
            .with_prompt("Enter credential to score")
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("input prompt: {e}")))?
    };

    let report = strength::score(&value);
    output::print_strength_report(&report);

    Ok(())
}
