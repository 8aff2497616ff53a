//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - The `CipherEngine` protecting stored secrets (`cipher`)
//! - HKDF-based per-message key/IV derivation and salt generation (`kdf`)

pub mod cipher;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::CipherEngine;
pub use cipher::CipherEngine;
pub use kdf::{derive_message_key, generate_salt};
