//! Per-month pot configuration edits.

use crate::domain::{MonthData, PotId};

/// Mutation helpers for a single month's pot settings. Edits never cascade
/// to other months, including months provisioned from this one earlier.
pub struct PotService;

impl PotService {
    /// Renames the pot for this month only. The name is stored as given;
    /// blank names fall back to a default label at read time.
    pub fn rename(month: &mut MonthData, pot_id: PotId, new_name: &str) {
        month.pots.get_mut(pot_id).name = new_name.to_string();
    }

    /// Updates the starting budget for this month only. Non-finite values
    /// are coerced to zero so the stored figure is always displayable.
    pub fn set_starting_budget(month: &mut MonthData, pot_id: PotId, value: f64) {
        let value = if value.is_finite() { value } else { 0.0 };
        month.pots.get_mut(pot_id).starting_budget = value;
    }
}
