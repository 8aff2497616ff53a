//! `passvault generate` — produce a random credential and score it.
//!
//! The credential itself is printed on its own line so the command can
//! be piped (e.g. `passvault generate | passvault add ... `); the
//! strength report goes after it.

use crate::cli::output;
use crate::config::Settings;
use crate::errors::{PassVaultError, Result};
use crate::generator::{generate, GeneratorOptions};
use crate::strength;

/// Execute the `generate` command.
pub fn execute(
    length: Option<usize>,
    no_uppercase: bool,
    no_lowercase: bool,
    no_digits: bool,
    no_symbols: bool,
    allow_ambiguous: bool,
    copy: bool,
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;

    let options = GeneratorOptions {
        length: length.unwrap_or(settings.generator_length),
        uppercase: !no_uppercase,
        lowercase: !no_lowercase,
        digits: !no_digits,
        symbols: !no_symbols,
        exclude_ambiguous: !allow_ambiguous,
    };

    let credential = generate(&options)?;

    println!("{credential}");

    // Explicit hand-off: the generated value is scored by the same
    // function users can call directly via `passvault strength`.
    let report = strength::score(&credential);
    output::print_strength_report(&report);

    if copy {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| PassVaultError::CommandFailed(format!("clipboard: {e}")))?;
        clipboard
            .set_text(credential)
            .map_err(|e| PassVaultError::CommandFailed(format!("clipboard: {e}")))?;
        output::success("Copied to clipboard.");
    }

    Ok(())
}
