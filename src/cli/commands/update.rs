//! `passvault update` — full replace of an existing entry's fields.

use crate::cli::output;
use crate::cli::{open_store, resolve_user, Cli};
use crate::config::Settings;
use crate::errors::Result;
use crate::vault::SecretInput;

use super::read_secret;

/// Execute the `update` command.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    cli: &Cli,
    id: &str,
    title: &str,
    username: &str,
    secret: Option<&str>,
    url: &str,
    notes: &str,
    tags: &[String],
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let owner = resolve_user(cli, &settings)?;

    let secret_value = read_secret(secret, &format!("Enter secret for {title}"))?;

    let store = open_store(cli, &settings)?;
    let record = store.update(
        &owner,
        id,
        &SecretInput {
            title: title.to_string(),
            username: username.to_string(),
            secret: secret_value,
            url: url.to_string(),
            notes: notes.to_string(),
            tags: tags.to_vec(),
        },
    )?;

    output::success(&format!("Updated '{}'", record.title));

    Ok(())
}
