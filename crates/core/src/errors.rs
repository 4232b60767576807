use thiserror::Error;

use crate::models::currency::CurrencyCode;

/// Unified error type for the entire currency-converter-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// None of these are fatal: the controller reports `InvalidAmount` to the
/// user and recovers from storage failures with in-memory defaults.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Conversion ──────────────────────────────────────────────────
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("No exchange rate known for {from} → {to}")]
    UnknownRatePair { from: CurrencyCode, to: CurrencyCode },

    #[error("Unsupported currency code: {0}")]
    InvalidCurrency(String),

    // ── Theme ───────────────────────────────────────────────────────
    #[error("Unknown theme: {0}")]
    InvalidTheme(String),

    // ── Storage ─────────────────────────────────────────────────────
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
