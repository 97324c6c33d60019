//! Typed errors for the layers below the consent store. Store operations
//! are total and never return these; callers of storage, record parsing,
//! category parsing and config decide whether to degrade or report. The
//! binary wraps them in `anyhow` context chains.

use thiserror::Error;

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Storage errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    #[error("quota exceeded writing {key} ({bytes} bytes, limit {limit})")]
    QuotaExceeded {
        key: String,
        bytes: usize,
        limit: usize,
    },

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Record errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed record: {0}")]
    Malformed(String),

    #[error("schema version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: String, found: String },

    #[error("invalid consent date: {0}")]
    InvalidDate(String),
}

// ─── Category errors ────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("unknown consent category: {0}")]
    Unknown(String),
}
