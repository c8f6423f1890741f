//! wallet-ledger - Per-wallet balance and transaction history reporting
//!
//! This library computes read-only views over externally-owned wallet and
//! transaction collections: a wallet's current balance, its income/expense
//! breakdown (transfer-direction-aware), and a date-grouped, newest-first
//! transaction history ready for display.
//!
//! Persistence, wallet management, currency formatting, and rendering are the
//! caller's concern. The crate only ever reads the snapshots it is handed,
//! so every entry point is a pure function of its inputs and safe to call
//! from concurrent contexts on independent data.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (wallets, transactions, money, ids)
//! - `reports`: Derived views (balance breakdown, grouped history, details)
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use wallet_ledger::models::{Money, Transaction, TransactionStore, Wallet, WalletStore};
//! use wallet_ledger::reports::WalletDetailsReport;
//!
//! let wallet = Wallet::with_initial_amount("Checking", Money::from_cents(100_000));
//! let txn = Transaction::new(wallet.id, Utc::now(), Money::from_cents(-2_500));
//!
//! let mut wallets = WalletStore::new();
//! let mut transactions = TransactionStore::new();
//! let wallet_id = wallet.id;
//! wallets.insert(wallet.id, wallet);
//! transactions.insert(txn.id, txn);
//!
//! let report = WalletDetailsReport::generate(&wallets, &transactions, wallet_id)?;
//! assert_eq!(report.current_balance, Money::from_cents(97_500));
//! # Ok::<(), wallet_ledger::LedgerError>(())
//! ```

pub mod error;
pub mod models;
pub mod reports;

pub use error::{LedgerError, LedgerResult};
