//! Vault module — owner-scoped encrypted credential storage.
//!
//! This module provides:
//! - `SecretRecord` and `SecretInput` types (`record`)
//! - The SQLite-backed `VaultStore` with encrypt-before-persist and
//!   decrypt-before-return semantics (`store`)

pub mod record;
pub mod store;

// Re-export the most commonly used items.
pub use record::{SecretInput, SecretRecord};
pub use store::VaultStore;
