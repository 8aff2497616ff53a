//! `passvault delete` — remove an entry from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{open_store, resolve_user, Cli};
use crate::config::Settings;
use crate::errors::{PassVaultError, Result};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, id: &str, force: bool) -> Result<()> {
    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete entry '{id}'?"))
            .default(false)
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let owner = resolve_user(cli, &settings)?;

    let store = open_store(cli, &settings)?;
    store.delete(&owner, id)?;

    output::success(&format!("Deleted entry '{id}'"));

    Ok(())
}
