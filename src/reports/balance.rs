//! Balance aggregation
//!
//! Folds a wallet's transactions into income and expense totals and derives
//! the current balance from the wallet's starting amount. Nothing here is
//! cached; every call recomputes from the transactions it is handed, so the
//! result can never drift from the source data.

use serde::{Deserialize, Serialize};

use crate::models::{Money, Transaction, Wallet, WalletId};

/// A wallet's net activity split into total income and total expenses
///
/// Both totals are absolute values and only ever grow during the fold, so
/// they are never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceBreakdown {
    /// Total money that flowed into the wallet
    pub income: Money,
    /// Total money that flowed out of the wallet
    pub expenses: Money,
}

impl BalanceBreakdown {
    /// Net activity: income minus expenses
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

/// Fold a wallet's transactions into a [`BalanceBreakdown`]
///
/// Amounts are recorded from the source wallet's perspective, so the effect
/// of a transaction depends on which side of it the wallet sits:
///
/// - wallet is the transfer's destination: the sign inverts - a negative
///   amount is money arriving (income), a positive amount is money leaving
///   (expense);
/// - wallet is the source: a positive amount is income, a negative amount
///   is an expense.
///
/// Zero amounts contribute to neither total. The fold is commutative, so
/// input order does not affect the result.
pub fn balance_breakdown<'a, I>(transactions: I, wallet_id: WalletId) -> BalanceBreakdown
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .fold(BalanceBreakdown::default(), |mut accum, txn| {
            if txn.destination_wallet_id == Some(wallet_id) {
                // Transfer observed from the receiving side: inverted sign
                if txn.amount.is_negative() {
                    accum.income += txn.amount.abs();
                } else if txn.amount.is_positive() {
                    accum.expenses += txn.amount.abs();
                }
            } else {
                // Wallet is the source, transfer or not
                if txn.amount.is_positive() {
                    accum.income += txn.amount.abs();
                } else if txn.amount.is_negative() {
                    accum.expenses += txn.amount.abs();
                }
            }
            accum
        })
}

/// Current balance: the wallet's starting amount plus net activity
pub fn current_balance(wallet: &Wallet, breakdown: &BalanceBreakdown) -> Money {
    wallet.initial_amount + breakdown.income - breakdown.expenses
}
