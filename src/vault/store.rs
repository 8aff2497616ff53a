//! High-level vault operations over the SQLite backing store.
//!
//! `VaultStore` owns the database handle and the cipher engine.  The
//! secret field is encrypted inline on create/update and decrypted
//! inline on list, so plaintext never reaches a storage row and
//! ciphertext never reaches a caller.
//!
//! Every operation is scoped by the authenticated owner id.  Update and
//! delete match on `(id, owner_id)` together, so a missing id and a
//! foreign id are indistinguishable to the caller.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use uuid::Uuid;

use crate::crypto::CipherEngine;
use crate::errors::{PassVaultError, Result};

use super::record::{SecretInput, SecretRecord};

/// The main vault handle.  Construct one at startup with
/// `VaultStore::open` and pass it by reference; there is no implicit
/// process-global connection.
pub struct VaultStore {
    conn: Connection,
    cipher: CipherEngine,
}

/// A storage row before the secret field is decrypted.
struct StoredRow {
    id: String,
    owner_id: String,
    title: String,
    username: String,
    encrypted_secret: Vec<u8>,
    url: String,
    notes: String,
    tags_json: String,
    created_at: String,
    updated_at: String,
}

impl VaultStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Open (or create) the vault database at `path`.
    ///
    /// Creates parent directories as needed and restricts the database
    /// file to the current user on Unix.
    pub fn open(path: &Path, cipher: CipherEngine) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            let _ = std::fs::set_permissions(path, perms);
        }

        Self::init_schema(&conn)?;
        Ok(Self { conn, cipher })
    }

    /// Open an in-memory vault.  Used by tests.
    pub fn open_in_memory(cipher: CipherEngine) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self { conn, cipher })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS secret_records (
                id               TEXT PRIMARY KEY,
                owner_id         TEXT NOT NULL,
                title            TEXT NOT NULL,
                username         TEXT NOT NULL,
                encrypted_secret BLOB NOT NULL,
                url              TEXT NOT NULL DEFAULT '',
                notes            TEXT NOT NULL DEFAULT '',
                tags             TEXT NOT NULL DEFAULT '[]',
                created_at       TEXT NOT NULL,
                updated_at       TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS secret_records_owner_created
                ON secret_records (owner_id, created_at DESC);",
        )?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// List the owner's records, newest first, decrypted.
    ///
    /// With a search term, keeps only records where the term matches
    /// case-insensitively as a substring of title, username, url, or
    /// any tag.
    pub fn list(&self, owner_id: &str, search: Option<&str>) -> Result<Vec<SecretRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, owner_id, title, username, encrypted_secret,
                    url, notes, tags, created_at, updated_at
             FROM secret_records
             WHERE owner_id = ?1
             ORDER BY created_at DESC, rowid DESC",
        )?;

        let rows = stmt.query_map([owner_id], |row| {
            Ok(StoredRow {
                id: row.get(0)?,
                owner_id: row.get(1)?,
                title: row.get(2)?,
                username: row.get(3)?,
                encrypted_secret: row.get(4)?,
                url: row.get(5)?,
                notes: row.get(6)?,
                tags_json: row.get(7)?,
                created_at: row.get(8)?,
                updated_at: row.get(9)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            let record = self.decrypt_row(row?)?;
            let keep = match search {
                Some(term) => record.matches(term),
                None => true,
            };
            if keep {
                records.push(record);
            }
        }

        Ok(records)
    }

    /// Create a new record for the owner.
    ///
    /// Validates and trims the input, encrypts the secret, and persists
    /// the row with a fresh id and timestamps.  The returned record
    /// echoes the plaintext secret the caller just supplied — a
    /// documented contract, not a leak.
    pub fn create(&self, owner_id: &str, input: &SecretInput) -> Result<SecretRecord> {
        let input = input.normalized()?;
        let encrypted = self.cipher.encrypt(&input.secret)?;
        let tags_json = encode_tags(&input.tags)?;

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        self.conn.execute(
            "INSERT INTO secret_records
                (id, owner_id, title, username, encrypted_secret,
                 url, notes, tags, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            rusqlite::params![
                id,
                owner_id,
                input.title,
                input.username,
                encrypted,
                input.url,
                input.notes,
                tags_json,
                now.to_rfc3339(),
                now.to_rfc3339(),
            ],
        )?;

        Ok(SecretRecord {
            id,
            owner_id: owner_id.to_string(),
            title: input.title,
            username: input.username,
            secret: input.secret,
            url: input.url,
            notes: input.notes,
            tags: input.tags,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace every mutable field of an owned record.
    ///
    /// Matches on `(id, owner_id)` together; fails with the generic
    /// `RecordNotFound` whether the id is unknown or owned by someone
    /// else.  Refreshes `updated_at`; `created_at` is untouched.
    /// Returns the updated record with the plaintext secret echoed.
    pub fn update(&self, owner_id: &str, id: &str, input: &SecretInput) -> Result<SecretRecord> {
        let input = input.normalized()?;
        let encrypted = self.cipher.encrypt(&input.secret)?;
        let tags_json = encode_tags(&input.tags)?;

        let now = Utc::now();

        let changed = self.conn.execute(
            "UPDATE secret_records
             SET title = ?1, username = ?2, encrypted_secret = ?3,
                 url = ?4, notes = ?5, tags = ?6, updated_at = ?7
             WHERE id = ?8 AND owner_id = ?9",
            rusqlite::params![
                input.title,
                input.username,
                encrypted,
                input.url,
                input.notes,
                tags_json,
                now.to_rfc3339(),
                id,
                owner_id,
            ],
        )?;

        if changed == 0 {
            return Err(PassVaultError::RecordNotFound);
        }

        let created_at: String = self.conn.query_row(
            "SELECT created_at FROM secret_records WHERE id = ?1 AND owner_id = ?2",
            [id, owner_id],
            |row| row.get(0),
        )?;

        Ok(SecretRecord {
            id: id.to_string(),
            owner_id: owner_id.to_string(),
            title: input.title,
            username: input.username,
            secret: input.secret,
            url: input.url,
            notes: input.notes,
            tags: input.tags,
            created_at: parse_timestamp(&created_at)?,
            updated_at: now,
        })
    }

    /// Delete an owned record.
    ///
    /// Same ownership-scoped match as `update`; `RecordNotFound` when
    /// nothing matches.
    pub fn delete(&self, owner_id: &str, id: &str) -> Result<()> {
        let removed = self.conn.execute(
            "DELETE FROM secret_records WHERE id = ?1 AND owner_id = ?2",
            [id, owner_id],
        )?;

        if removed == 0 {
            return Err(PassVaultError::RecordNotFound);
        }
        Ok(())
    }

    /// Number of records owned by `owner_id`.
    pub fn record_count(&self, owner_id: &str) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM secret_records WHERE owner_id = ?1",
            [owner_id],
            |row| row.get(0),
        )?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    // ------------------------------------------------------------------
    // Row conversion
    // ------------------------------------------------------------------

    fn decrypt_row(&self, row: StoredRow) -> Result<SecretRecord> {
        let secret = self.cipher.decrypt(&row.encrypted_secret)?;
        let tags: Vec<String> = serde_json::from_str(&row.tags_json)
            .map_err(|e| PassVaultError::SerializationError(format!("tags column: {e}")))?;

        Ok(SecretRecord {
            id: row.id,
            owner_id: row.owner_id,
            title: row.title,
            username: row.username,
            secret,
            url: row.url,
            notes: row.notes,
            tags,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    }
}

fn encode_tags(tags: &[String]) -> Result<String> {
    serde_json::to_string(tags)
        .map_err(|e| PassVaultError::SerializationError(format!("tags: {e}")))
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| PassVaultError::SerializationError(format!("timestamp column: {e}")))
}
