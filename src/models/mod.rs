//! Core data models for wallet-ledger
//!
//! This module contains the data structures that represent the ledger
//! domain: wallets, transactions, money amounts, and typed identifiers.

use std::collections::HashMap;

pub mod ids;
pub mod money;
pub mod transaction;
pub mod wallet;

pub use ids::{TransactionId, WalletId};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionValidationError};
pub use wallet::Wallet;

/// Snapshot of the wallet collection, keyed by id
///
/// Owned and mutated by the calling application; reports only read it.
pub type WalletStore = HashMap<WalletId, Wallet>;

/// Snapshot of the transaction collection, keyed by id
pub type TransactionStore = HashMap<TransactionId, Transaction>;
