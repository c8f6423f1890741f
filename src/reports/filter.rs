//! Transaction filtering
//!
//! Selects the transactions relevant to a wallet, whether the wallet is the
//! source or the destination of the movement. Output order is unspecified;
//! ordering is established by the consumers downstream.

use crate::models::{Transaction, TransactionStore, WalletId};

/// Select the transactions involving a wallet as source or destination
///
/// An empty store or a wallet with no matching transactions yields an empty
/// vec, not an error.
pub fn wallet_transactions(store: &TransactionStore, wallet_id: WalletId) -> Vec<&Transaction> {
    store.values().filter(|txn| txn.involves(wallet_id)).collect()
}
