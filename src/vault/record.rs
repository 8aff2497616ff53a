//! Record types exchanged with the vault store.
//!
//! `SecretRecord` is what callers receive: the secret field carries the
//! decrypted plaintext.  The ciphertext only ever lives in the storage
//! row; it is never part of the public record type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::{PassVaultError, Result};

/// A stored credential entry, decrypted for its owner.
#[derive(Debug, Clone, Serialize)]
pub struct SecretRecord {
    /// Opaque unique id, assigned at creation.
    pub id: String,

    /// Id of the user who owns this record.  Immutable.
    pub owner_id: String,

    pub title: String,
    pub username: String,

    /// The decrypted secret.  At rest this field is stored as a
    /// ciphertext blob produced by the cipher engine.
    pub secret: String,

    pub url: String,
    pub notes: String,

    /// Tags in insertion order; duplicates are kept as entered.
    pub tags: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SecretRecord {
    /// Case-insensitive substring match over title, username, url, and
    /// tags.  Notes and the secret itself are deliberately not searched.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.username.to_lowercase().contains(&needle)
            || self.url.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// Caller-supplied fields for create and update.
///
/// Update is a full replace: every field here overwrites the stored
/// value, including `url`, `notes`, and `tags`.
#[derive(Debug, Clone, Default)]
pub struct SecretInput {
    pub title: String,
    pub username: String,
    pub secret: String,
    pub url: String,
    pub notes: String,
    pub tags: Vec<String>,
}

impl SecretInput {
    /// Trim every field and enforce the required ones.
    ///
    /// Fails with `MissingField` if title, username, or secret is empty
    /// after trimming.
    pub fn normalized(&self) -> Result<SecretInput> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(PassVaultError::MissingField("title"));
        }

        let username = self.username.trim().to_string();
        if username.is_empty() {
            return Err(PassVaultError::MissingField("username"));
        }

        let secret = self.secret.trim().to_string();
        if secret.is_empty() {
            return Err(PassVaultError::MissingField("secret"));
        }

        Ok(SecretInput {
            title,
            username,
            secret,
            url: self.url.trim().to_string(),
            notes: self.notes.trim().to_string(),
            tags: self.tags.iter().map(|t| t.trim().to_string()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(title: &str, username: &str, url: &str, tags: &[&str]) -> SecretRecord {
        SecretRecord {
            id: "id".into(),
            owner_id: "owner".into(),
            title: title.into(),
            username: username.into(),
            secret: "s3cret".into(),
            url: url.into(),
            notes: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn matches_is_case_insensitive() {
        let r = record_with("GitHub", "octocat", "", &[]);
        assert!(r.matches("github"));
        assert!(r.matches("HUB"));
        assert!(r.matches("OCTO"));
    }

    #[test]
    fn matches_searches_tags() {
        let r = record_with("Mail", "me", "", &["Work", "personal"]);
        assert!(r.matches("wo"));
        assert!(r.matches("PERSONAL"));
        assert!(!r.matches("banking"));
    }

    #[test]
    fn matches_searches_url() {
        let r = record_with("Bank", "me", "https://example.com/login", &[]);
        assert!(r.matches("example.com"));
    }

    #[test]
    fn normalized_trims_fields() {
        let input = SecretInput {
            title: "  GitHub  ".into(),
            username: " octocat ".into(),
            secret: " hunter2 ".into(),
            url: "  https://github.com ".into(),
            notes: " note ".into(),
            tags: vec![" Work ".into(), "dev".into()],
        };
        let n = input.normalized().unwrap();
        assert_eq!(n.title, "GitHub");
        assert_eq!(n.username, "octocat");
        assert_eq!(n.secret, "hunter2");
        assert_eq!(n.url, "https://github.com");
        assert_eq!(n.notes, "note");
        assert_eq!(n.tags, vec!["Work", "dev"]);
    }

    #[test]
    fn normalized_rejects_blank_required_fields() {
        let mut input = SecretInput {
            title: "t".into(),
            username: "u".into(),
            secret: "s".into(),
            ..SecretInput::default()
        };

        input.title = "   ".into();
        assert!(matches!(
            input.normalized(),
            Err(PassVaultError::MissingField("title"))
        ));

        input.title = "t".into();
        input.username = String::new();
        assert!(matches!(
            input.normalized(),
            Err(PassVaultError::MissingField("username"))
        ));

        input.username = "u".into();
        input.secret = " ".into();
        assert!(matches!(
            input.normalized(),
            Err(PassVaultError::MissingField("secret"))
        ));
    }

    #[test]
    fn normalized_keeps_duplicate_tags() {
        let input = SecretInput {
            title: "t".into(),
            username: "u".into(),
            secret: "s".into(),
            tags: vec!["a".into(), "a".into(), "b".into()],
            ..SecretInput::default()
        };
        let n = input.normalized().unwrap();
        assert_eq!(n.tags, vec!["a", "a", "b"]);
    }
}
