//! `passvault list` — display credential entries in a table.

use crate::cli::output;
use crate::cli::{open_store, resolve_user, Cli};
use crate::config::Settings;
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli, search: Option<&str>, show_secrets: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let owner = resolve_user(cli, &settings)?;

    let store = open_store(cli, &settings)?;
    let records = store.list(&owner, search)?;

    match search {
        Some(term) => output::info(&format!(
            "{} entr{} matching '{term}'",
            records.len(),
            if records.len() == 1 { "y" } else { "ies" }
        )),
        None => output::info(&format!(
            "{} entr{}",
            records.len(),
            if records.len() == 1 { "y" } else { "ies" }
        )),
    }

    output::print_records_table(&records, show_secrets);

    Ok(())
}
