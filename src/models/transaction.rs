//! Transaction model
//!
//! Represents a signed monetary movement: either an ordinary income/expense
//! against a single wallet, or a transfer between two wallets.
//!
//! Amounts are always recorded from the source wallet's perspective: a
//! positive amount is money flowing into the source wallet, a negative
//! amount is money flowing out. A transfer's destination wallet experiences
//! the opposite effect; reports invert the sign when evaluating one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{TransactionId, WalletId};
use super::money::Money;

/// A financial transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// The wallet the funds leave, or the sole wallet of an ordinary transaction
    pub source_wallet_id: WalletId,

    /// The wallet the funds enter; present only for transfers
    pub destination_wallet_id: Option<WalletId>,

    /// Signed amount, recorded from the source wallet's perspective
    pub amount: Money,

    /// Category label, opaque to aggregation
    #[serde(default)]
    pub category: String,

    /// When the payment happened
    pub paid_at: DateTime<Utc>,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new ordinary transaction against a single wallet
    pub fn new(source_wallet_id: WalletId, paid_at: DateTime<Utc>, amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            source_wallet_id,
            destination_wallet_id: None,
            amount,
            category: String::new(),
            paid_at,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a transfer between two wallets
    pub fn transfer(
        source_wallet_id: WalletId,
        destination_wallet_id: WalletId,
        paid_at: DateTime<Utc>,
        amount: Money,
    ) -> Self {
        let mut txn = Self::new(source_wallet_id, paid_at, amount);
        txn.destination_wallet_id = Some(destination_wallet_id);
        txn
    }

    /// Set the category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Check if this is a transfer
    pub fn is_transfer(&self) -> bool {
        self.destination_wallet_id.is_some()
    }

    /// Check if the given wallet is involved, as source or destination
    pub fn involves(&self, wallet_id: WalletId) -> bool {
        self.source_wallet_id == wallet_id || self.destination_wallet_id == Some(wallet_id)
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        // A transfer must move funds between two distinct wallets
        if self.destination_wallet_id == Some(self.source_wallet_id) {
            return Err(TransactionValidationError::SelfTransfer);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.paid_at.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    SelfTransfer,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfTransfer => {
                write!(f, "Transfer source and destination wallets must differ")
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
