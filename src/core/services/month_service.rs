//! Lazy provisioning and selection of calendar months.

use crate::domain::{LedgerDocument, MonthData, MonthKey};

/// Clone-on-demand month lifecycle helpers.
pub struct MonthService;

impl MonthService {
    /// Ensures `key` has month data, returning `true` when it was created.
    ///
    /// A new month copies pot configuration from the chronologically latest
    /// existing month; transactions are never carried over. With no months
    /// on record the zeroed defaults are used. Idempotent: an existing month
    /// is returned untouched.
    pub fn ensure(document: &mut LedgerDocument, key: MonthKey) -> bool {
        if document.months.contains_key(&key) {
            return false;
        }
        let template = document
            .latest_month()
            .map(|(_, data)| MonthData::from_template(&data.pots))
            .unwrap_or_else(MonthData::zeroed);
        document.months.insert(key, template);
        true
    }

    /// Makes `key` the active month, provisioning it when missing.
    pub fn select(document: &mut LedgerDocument, key: MonthKey) -> bool {
        let created = Self::ensure(document, key);
        document.active_month_key = key;
        created
    }

    /// Moves the selection to the month after the active one.
    ///
    /// An already-existing successor is simply selected; otherwise it is
    /// created from the active month's pot configuration, so advancing from
    /// a past month copies that month rather than the newest one.
    pub fn advance(document: &mut LedgerDocument) -> MonthKey {
        let active = document.active_month_key;
        Self::ensure(document, active);
        let next = active.successor();
        if !document.months.contains_key(&next) {
            let template = MonthData::from_template(&document.months[&active].pots);
            document.months.insert(next, template);
        }
        document.active_month_key = next;
        next
    }

    /// All known months in chronological order with display labels.
    pub fn listing(document: &LedgerDocument) -> Vec<(MonthKey, String)> {
        document
            .months
            .keys()
            .map(|key| (*key, key.label()))
            .collect()
    }
}
