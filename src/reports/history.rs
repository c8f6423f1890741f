//! Chronological grouping
//!
//! Orders a wallet's transactions newest-first and partitions them into
//! calendar-day groups for display, most recent day first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// Format of the calendar-day group titles, e.g. "March 5 2024"
const DAY_TITLE_FORMAT: &str = "%B %-d %Y";

/// A group of transactions sharing the same calendar day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateGroup {
    /// Display label for the day, e.g. "March 5 2024"
    pub title: String,
    /// The day's transactions, newest first
    pub transactions: Vec<Transaction>,
}

/// Group transactions into newest-first calendar-day buckets
///
/// Transactions are ordered by `paid_at` descending; equal timestamps are
/// broken by transaction id ascending so the output is deterministic
/// regardless of input order. The day key is the UTC calendar day of
/// `paid_at`; sorting first makes same-day transactions contiguous, so a
/// single pass over the ordered sequence builds the groups. Empty input
/// yields an empty sequence.
pub fn grouped_history(mut transactions: Vec<&Transaction>) -> Vec<DateGroup> {
    transactions.sort_by(|a, b| {
        b.paid_at
            .cmp(&a.paid_at)
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut groups: Vec<(NaiveDate, DateGroup)> = Vec::new();
    for txn in transactions {
        let day = txn.paid_at.date_naive();
        match groups.last_mut() {
            Some((current_day, group)) if *current_day == day => {
                group.transactions.push(txn.clone());
            }
            _ => {
                groups.push((
                    day,
                    DateGroup {
                        title: txn.paid_at.format(DAY_TITLE_FORMAT).to_string(),
                        transactions: vec![txn.clone()],
                    },
                ));
            }
        }
    }

    groups.into_iter().map(|(_, group)| group).collect()
}
