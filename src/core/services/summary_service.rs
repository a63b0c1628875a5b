//! Read-time aggregation over a month's transactions.

use serde::Serialize;

use crate::domain::{MonthData, PotId, Transaction};

/// Aggregated figures for one pot in one month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PotTotals {
    pub starting_budget: f64,
    pub spent: f64,
    pub remaining: f64,
}

/// Pure aggregation queries; nothing here mutates or persists.
pub struct SummaryService;

impl SummaryService {
    /// Spent/remaining totals for `pot_id`. Remaining may go negative;
    /// that is a signal for the caller, not an error.
    pub fn totals(month: &MonthData, pot_id: PotId) -> PotTotals {
        let starting_budget = month.pots.get(pot_id).starting_budget;
        let spent: f64 = month
            .transactions
            .iter()
            .filter(|txn| txn.pot_id == pot_id)
            .map(|txn| txn.amount)
            .sum();
        PotTotals {
            starting_budget,
            spent,
            remaining: starting_budget - spent,
        }
    }

    /// The pot's transactions, newest first. Ordering is computed here at
    /// query time; storage order carries no meaning.
    pub fn transactions_newest_first<'a>(
        month: &'a MonthData,
        pot_id: PotId,
    ) -> Vec<&'a Transaction> {
        let mut list: Vec<&Transaction> = month
            .transactions
            .iter()
            .filter(|txn| txn.pot_id == pot_id)
            .collect();
        list.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        list
    }
}
