//! Reports module for wallet-ledger
//!
//! Derived, read-only views over wallet and transaction snapshots: the
//! transaction filter, the balance aggregation, the date-grouped history,
//! and the combined wallet details report.
//!
//! Every function here recomputes from the stores it is handed and mutates
//! nothing, so callers on independent data need no coordination.

pub mod balance;
pub mod filter;
pub mod history;
pub mod wallet_details;

pub use balance::{balance_breakdown, current_balance, BalanceBreakdown};
pub use filter::wallet_transactions;
pub use history::{grouped_history, DateGroup};
pub use wallet_details::{HistoryEntry, HistoryGroup, WalletDetailsReport};
