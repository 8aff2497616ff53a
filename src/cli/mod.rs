//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::crypto::CipherEngine;
use crate::errors::{PassVaultError, Result};
use crate::vault::VaultStore;

/// PassVault CLI: encrypted password vault with generation and scoring.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Encrypted password vault manager",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Owner id for all vault operations
    #[arg(short, long, global = true, env = "PASSVAULT_USER")]
    pub user: Option<String>,

    /// Vault database path (default: .passvault/vault.db)
    #[arg(long, global = true)]
    pub db: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Add a credential entry to the vault
    Add {
        /// Entry title (e.g. "GitHub")
        #[arg(long)]
        title: String,
        /// Login username or email
        #[arg(long)]
        username: String,
        /// Secret value (omit for interactive prompt or piped stdin)
        #[arg(long)]
        secret: Option<String>,
        /// Associated URL
        #[arg(long, default_value = "")]
        url: String,
        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
        /// Tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// List credential entries
    List {
        /// Filter by a case-insensitive substring of title/username/url/tags
        #[arg(short, long)]
        search: Option<String>,
        /// Show decrypted secrets instead of masking them
        #[arg(long)]
        show_secrets: bool,
    },

    /// Replace every field of an existing entry
    Update {
        /// Entry id
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        username: String,
        /// Secret value (omit for interactive prompt or piped stdin)
        #[arg(long)]
        secret: Option<String>,
        #[arg(long, default_value = "")]
        url: String,
        #[arg(long, default_value = "")]
        notes: String,
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a random credential
    Generate {
        /// Length of the generated credential
        #[arg(short, long)]
        length: Option<usize>,
        /// Exclude uppercase letters
        #[arg(long)]
        no_uppercase: bool,
        /// Exclude lowercase letters
        #[arg(long)]
        no_lowercase: bool,
        /// Exclude digits
        #[arg(long)]
        no_digits: bool,
        /// Exclude symbols
        #[arg(long)]
        no_symbols: bool,
        /// Keep visually ambiguous glyphs (I/L, l/o, 1/0)
        #[arg(long)]
        allow_ambiguous: bool,
        /// Copy the credential to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Score the strength of a credential
    Strength {
        /// Credential to score (omit for interactive prompt or piped stdin)
        credential: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolve the authenticated owner id, trying in order:
/// 1. `--user` flag / `PASSVAULT_USER` env var (clap handles both)
/// 2. `default_user` from `.passvault.toml`
pub fn resolve_user(cli: &Cli, settings: &Settings) -> Result<String> {
    if let Some(user) = &cli.user {
        let trimmed = user.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }
    if let Some(user) = &settings.default_user {
        let trimmed = user.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }
    Err(PassVaultError::AuthRequired)
}

/// Get the shared encryption key, trying in order:
/// 1. `PASSVAULT_KEY` env var (CI/scripting)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the key is wiped from memory on drop.
pub fn resolve_key() -> Result<Zeroizing<String>> {
    if let Ok(key) = std::env::var("PASSVAULT_KEY") {
        if !key.is_empty() {
            return Ok(Zeroizing::new(key));
        }
    }

    let key = dialoguer::Password::new()
        .with_prompt("Enter vault key")
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("key prompt: {e}")))?;
    Ok(Zeroizing::new(key))
}

/// Build the vault database path from the CLI arguments and settings.
pub fn db_path(cli: &Cli, settings: &Settings) -> Result<PathBuf> {
    if let Some(db) = &cli.db {
        return Ok(PathBuf::from(db));
    }
    let cwd = std::env::current_dir()?;
    Ok(settings.vault_db_path(&cwd))
}

/// Open the vault store: resolve the key, build the cipher engine, and
/// connect to the database.  Used by every storage command.
pub fn open_store(cli: &Cli, settings: &Settings) -> Result<VaultStore> {
    let key = resolve_key()?;
    let cipher = CipherEngine::new(&key);
    VaultStore::open(&db_path(cli, settings)?, cipher)
}
