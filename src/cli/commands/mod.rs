//! Command implementations, one module per subcommand.

pub mod add;
pub mod completions;
pub mod delete;
pub mod generate;
pub mod list;
pub mod strength_cmd;
pub mod update;

use std::io::{self, IsTerminal, Read};

use crate::errors::{PassVaultError, Result};

/// Determine a secret value from one of three sources, in order:
/// inline flag, piped stdin, interactive hidden prompt.
///
/// Shared by `add` and `update`.
pub(crate) fn read_secret(inline: Option<&str>, prompt: &str) -> Result<String> {
    if let Some(v) = inline {
        // Source 1: Inline value on the command line.
        super::output::warning("Secret provided on command line — it may appear in shell history.");
        return Ok(v.to_string());
    }

    if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf.trim_end().to_string());
    }

    // Source 3: Interactive secure prompt (default).
    dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("input prompt: {e}")))
}
