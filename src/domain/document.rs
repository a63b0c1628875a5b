//! The persisted ledger document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{
    month::{MonthData, MonthKey},
    pot::PotId,
};

pub const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The complete persisted state: months, pots, transactions, and the
/// current selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerDocument {
    #[serde(default = "LedgerDocument::schema_version_default")]
    pub schema_version: u8,
    pub active_month_key: MonthKey,
    pub active_pot_id: PotId,
    pub months: BTreeMap<MonthKey, MonthData>,
}

impl LedgerDocument {
    /// Fresh document with one bootstrap month and pot A selected.
    pub fn bootstrap(current: MonthKey) -> Self {
        let mut months = BTreeMap::new();
        months.insert(current, MonthData::bootstrap());
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            active_month_key: current,
            active_pot_id: PotId::PotA,
            months,
        }
    }

    pub fn month(&self, key: MonthKey) -> Option<&MonthData> {
        self.months.get(&key)
    }

    pub fn month_mut(&mut self, key: MonthKey) -> Option<&mut MonthData> {
        self.months.get_mut(&key)
    }

    /// The chronologically latest month on record. Keys order by calendar
    /// position, so creation order is irrelevant here.
    pub fn latest_month(&self) -> Option<(MonthKey, &MonthData)> {
        self.months.last_key_value().map(|(key, data)| (*key, data))
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
