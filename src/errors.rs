use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — wrong key or corrupted data")]
    DecryptionFailed,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Validation errors ---
    #[error("{0} is required")]
    MissingField(&'static str),

    // --- Identity errors ---
    #[error("No user identity — pass --user or set PASSVAULT_USER")]
    AuthRequired,

    // --- Vault errors ---
    //
    // Deliberately generic: the message must not reveal whether the id
    // exists at all or belongs to another owner.
    #[error("Item not found")]
    RecordNotFound,

    // --- Generator errors ---
    #[error("At least one character class must be enabled")]
    InvalidGeneratorConfig,

    // --- Storage errors ---
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;
