//! Wallet model
//!
//! Represents a holder of funds with a starting balance. Wallet creation,
//! editing, and persistence live with the owning application; this crate
//! only reads wallets when computing reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::WalletId;
use super::money::Money;

/// An account holder of funds with a starting balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    /// Unique identifier
    pub id: WalletId,

    /// Display label (e.g., "Everyday Checking")
    pub label: String,

    /// Signed starting balance; transactions are applied on top of this
    pub initial_amount: Money,

    /// When the wallet was created
    pub created_at: DateTime<Utc>,

    /// When the wallet was last modified
    pub updated_at: DateTime<Utc>,
}

impl Wallet {
    /// Create a new wallet with a zero starting balance
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_initial_amount(label, Money::zero())
    }

    /// Create a new wallet with a starting balance
    pub fn with_initial_amount(label: impl Into<String>, initial_amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: WalletId::new(),
            label: label.into(),
            initial_amount,
            created_at: now,
            updated_at: now,
        }
    }
}

impl fmt::Display for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.initial_amount)
    }
}
