//! Domain model for recorded expenses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::pot::PotId;

/// A single expense debited against one pot.
///
/// Immutable after creation; the only lifecycle operation is deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub pot_id: PotId,
    pub amount: f64,
    pub note: String,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Creates a transaction with a fresh identifier and the current time.
    pub fn new(pot_id: PotId, amount: f64, note: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            pot_id,
            amount,
            note: note.into(),
            timestamp: Utc::now(),
        }
    }
}
