//! Wallet details report
//!
//! The full per-wallet view a detail screen renders: the balance breakdown
//! and current balance next to the date-grouped history, with wallet labels
//! resolved for each entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, TransactionId, TransactionStore, WalletId, WalletStore};
use crate::reports::balance::{balance_breakdown, current_balance, BalanceBreakdown};
use crate::reports::filter::wallet_transactions;
use crate::reports::history::grouped_history;

/// A single display-ready history entry with resolved wallet labels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Transaction id
    pub id: TransactionId,
    /// Category label
    pub category: String,
    /// Signed amount, from the source wallet's perspective
    pub amount: Money,
    /// When the payment happened
    pub paid_at: DateTime<Utc>,
    /// Label of the wallet the funds left
    pub source_wallet: String,
    /// Label of the wallet the funds entered, for transfers
    pub destination_wallet: Option<String>,
}

/// A calendar day of history entries, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryGroup {
    /// Display label for the day, e.g. "March 5 2024"
    pub title: String,
    /// The day's entries, newest first
    pub entries: Vec<HistoryEntry>,
}

/// Everything a wallet detail view needs, computed in one pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletDetailsReport {
    /// Wallet id
    pub wallet_id: WalletId,
    /// Wallet label
    pub wallet_label: String,
    /// The wallet's starting balance
    pub initial_amount: Money,
    /// Income/expense totals over the wallet's transactions
    pub breakdown: BalanceBreakdown,
    /// Starting balance plus net activity
    pub current_balance: Money,
    /// Number of transactions involving the wallet
    pub transaction_count: usize,
    /// Date-grouped history, most recent day first
    pub groups: Vec<HistoryGroup>,
}

impl WalletDetailsReport {
    /// Generate the details report for a wallet
    ///
    /// Fails only when `wallet_id` is absent from the wallet store. A
    /// transaction referencing a wallet the store no longer knows keeps its
    /// entry; the missing label falls back to the id's short display form.
    pub fn generate(
        wallets: &WalletStore,
        transactions: &TransactionStore,
        wallet_id: WalletId,
    ) -> LedgerResult<Self> {
        let wallet = wallets
            .get(&wallet_id)
            .ok_or_else(|| LedgerError::wallet_not_found(wallet_id.to_string()))?;

        let selected = wallet_transactions(transactions, wallet_id);
        let transaction_count = selected.len();

        let breakdown = balance_breakdown(selected.iter().copied(), wallet_id);
        let balance = current_balance(wallet, &breakdown);

        let label_of = |id: WalletId| -> String {
            wallets
                .get(&id)
                .map(|w| w.label.clone())
                .unwrap_or_else(|| id.to_string())
        };

        let groups = grouped_history(selected)
            .into_iter()
            .map(|group| HistoryGroup {
                title: group.title,
                entries: group
                    .transactions
                    .into_iter()
                    .map(|txn| HistoryEntry {
                        id: txn.id,
                        category: txn.category,
                        amount: txn.amount,
                        paid_at: txn.paid_at,
                        source_wallet: label_of(txn.source_wallet_id),
                        destination_wallet: txn.destination_wallet_id.map(|id| label_of(id)),
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            wallet_id,
            wallet_label: wallet.label.clone(),
            initial_amount: wallet.initial_amount,
            breakdown,
            current_balance: balance,
            transaction_count,
            groups,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, Wallet};
    use chrono::TimeZone;

    struct Fixture {
        wallets: WalletStore,
        transactions: TransactionStore,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                wallets: WalletStore::new(),
                transactions: TransactionStore::new(),
            }
        }

        fn add_wallet(&mut self, wallet: Wallet) -> WalletId {
            let id = wallet.id;
            self.wallets.insert(id, wallet);
            id
        }

        fn add_transaction(&mut self, txn: Transaction) {
            self.transactions.insert(txn.id, txn);
        }
    }

    fn march(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_unknown_wallet_errors() {
        let fixture = Fixture::new();
        let result =
            WalletDetailsReport::generate(&fixture.wallets, &fixture.transactions, WalletId::new());
        assert!(matches!(result, Err(err) if err.is_not_found()));
    }

    #[test]
    fn test_empty_wallet() {
        let mut fixture = Fixture::new();
        let wallet_id =
            fixture.add_wallet(Wallet::with_initial_amount("Cash", Money::from_cents(5000)));

        let report =
            WalletDetailsReport::generate(&fixture.wallets, &fixture.transactions, wallet_id)
                .unwrap();

        assert_eq!(report.breakdown, BalanceBreakdown::default());
        assert_eq!(report.current_balance, Money::from_cents(5000));
        assert_eq!(report.transaction_count, 0);
        assert!(report.groups.is_empty());
    }

    #[test]
    fn test_combined_view() {
        let mut fixture = Fixture::new();
        let checking =
            fixture.add_wallet(Wallet::with_initial_amount("Checking", Money::from_cents(100_000)));
        let savings = fixture.add_wallet(Wallet::new("Savings"));

        fixture.add_transaction(
            Transaction::new(checking, march(5, 9), Money::from_cents(-4_200))
                .with_category("Groceries"),
        );
        fixture.add_transaction(
            Transaction::new(checking, march(7, 12), Money::from_cents(250_000))
                .with_category("Salary"),
        );
        fixture.add_transaction(Transaction::transfer(
            savings,
            checking,
            march(7, 18),
            Money::from_cents(-10_000),
        ));
        // Unrelated wallet pair, must not appear
        let other = fixture.add_wallet(Wallet::new("Other"));
        fixture.add_transaction(Transaction::new(other, march(6, 6), Money::from_cents(999)));

        let report =
            WalletDetailsReport::generate(&fixture.wallets, &fixture.transactions, checking)
                .unwrap();

        assert_eq!(report.wallet_label, "Checking");
        assert_eq!(report.transaction_count, 3);
        // Salary 2500.00 + transfer-in 100.00 as income, groceries 42.00 expense
        assert_eq!(report.breakdown.income, Money::from_cents(260_000));
        assert_eq!(report.breakdown.expenses, Money::from_cents(4_200));
        assert_eq!(report.current_balance, Money::from_cents(355_800));

        let titles: Vec<&str> = report.groups.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["March 7 2024", "March 5 2024"]);
        assert_eq!(report.groups[0].entries.len(), 2);
        assert_eq!(report.groups[1].entries.len(), 1);
    }

    #[test]
    fn test_labels_resolved() {
        let mut fixture = Fixture::new();
        let checking = fixture.add_wallet(Wallet::new("Checking"));
        let savings = fixture.add_wallet(Wallet::new("Savings"));

        fixture.add_transaction(Transaction::transfer(
            checking,
            savings,
            march(5, 10),
            Money::from_cents(2_000),
        ));

        let report =
            WalletDetailsReport::generate(&fixture.wallets, &fixture.transactions, checking)
                .unwrap();

        let entry = &report.groups[0].entries[0];
        assert_eq!(entry.source_wallet, "Checking");
        assert_eq!(entry.destination_wallet.as_deref(), Some("Savings"));
    }

    #[test]
    fn test_dangling_wallet_reference_falls_back_to_id() {
        let mut fixture = Fixture::new();
        let checking = fixture.add_wallet(Wallet::new("Checking"));
        let gone = WalletId::new();

        fixture.add_transaction(Transaction::transfer(
            gone,
            checking,
            march(5, 10),
            Money::from_cents(-2_000),
        ));

        let report =
            WalletDetailsReport::generate(&fixture.wallets, &fixture.transactions, checking)
                .unwrap();

        let entry = &report.groups[0].entries[0];
        assert_eq!(entry.source_wallet, gone.to_string());
        assert_eq!(entry.destination_wallet.as_deref(), Some("Checking"));
    }

    #[test]
    fn test_serialization() {
        let mut fixture = Fixture::new();
        let wallet_id = fixture.add_wallet(Wallet::new("Cash"));
        fixture.add_transaction(Transaction::new(
            wallet_id,
            march(5, 10),
            Money::from_cents(-100),
        ));

        let report =
            WalletDetailsReport::generate(&fixture.wallets, &fixture.transactions, wallet_id)
                .unwrap();

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: WalletDetailsReport = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.wallet_id, wallet_id);
        assert_eq!(deserialized.groups.len(), 1);
    }
}
