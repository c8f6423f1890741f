//! Custom error types for wallet-ledger
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions. The aggregation core itself is total;
//! errors only arise at the lookup seams (unknown wallet ids and the like).

use thiserror::Error;

/// The main error type for wallet-ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),
}

impl LedgerError {
    /// Create a "not found" error for wallets
    pub fn wallet_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Wallet",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias using LedgerError
pub type LedgerResult<T> = Result<T, LedgerError>;
