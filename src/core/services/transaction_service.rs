//! Validated mutations of a month's transaction list.

use uuid::Uuid;

use crate::domain::{MonthData, PotId, Transaction};

use super::{ServiceError, ServiceResult};

/// Placeholder note used when an expense is added without one.
pub const DEFAULT_NOTE: &str = "Expense";

/// Provides validated add/remove helpers for expenses.
pub struct TransactionService;

impl TransactionService {
    /// Parses a user-supplied amount string, accepting a decimal comma.
    pub fn parse_amount(raw: &str) -> ServiceResult<f64> {
        let normalized = raw.trim().replace(',', ".");
        let amount: f64 = normalized
            .parse()
            .map_err(|_| ServiceError::Invalid(format!("`{raw}` is not a number")))?;
        Self::validate_amount(amount)?;
        Ok(amount)
    }

    /// Records a new expense against `pot_id`, returning its identifier.
    /// Rejects non-finite and non-positive amounts without mutating the
    /// month.
    pub fn add(
        month: &mut MonthData,
        pot_id: PotId,
        amount: f64,
        note: &str,
    ) -> ServiceResult<Uuid> {
        Self::validate_amount(amount)?;
        let note = note.trim();
        let note = if note.is_empty() { DEFAULT_NOTE } else { note };
        let transaction = Transaction::new(pot_id, amount, note);
        let id = transaction.id;
        month.transactions.push(transaction);
        Ok(id)
    }

    /// Deletes the transaction with `id`; absent ids are a no-op. Returns
    /// whether anything was removed.
    pub fn remove(month: &mut MonthData, id: Uuid) -> bool {
        let before = month.transactions.len();
        month.transactions.retain(|txn| txn.id != id);
        month.transactions.len() != before
    }

    /// Deletes every transaction of `pot_id`, returning how many went away.
    pub fn reset_pot(month: &mut MonthData, pot_id: PotId) -> usize {
        let before = month.transactions.len();
        month.transactions.retain(|txn| txn.pot_id != pot_id);
        before - month.transactions.len()
    }

    fn validate_amount(amount: f64) -> ServiceResult<()> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ServiceError::Invalid(
                "amount must be a finite number greater than zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_month() -> MonthData {
        MonthData::bootstrap()
    }

    #[test]
    fn add_records_exactly_one_transaction() {
        let mut month = base_month();
        let id = TransactionService::add(&mut month, PotId::PotA, 12.50, "Kaffee").unwrap();
        assert_eq!(month.transactions.len(), 1);
        let txn = &month.transactions[0];
        assert_eq!(txn.id, id);
        assert_eq!(txn.amount, 12.50);
        assert_eq!(txn.note, "Kaffee");
        assert_eq!(txn.pot_id, PotId::PotA);
    }

    #[test]
    fn add_rejects_zero_and_negative_amounts() {
        let mut month = base_month();
        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = TransactionService::add(&mut month, PotId::PotA, amount, "bad")
                .expect_err("amount must be rejected");
            assert!(matches!(err, ServiceError::Invalid(_)));
        }
        assert!(month.transactions.is_empty());
    }

    #[test]
    fn add_defaults_a_blank_note() {
        let mut month = base_month();
        TransactionService::add(&mut month, PotId::PotB, 3.0, "   ").unwrap();
        assert_eq!(month.transactions[0].note, DEFAULT_NOTE);
    }

    #[test]
    fn parse_amount_accepts_decimal_comma() {
        assert_eq!(TransactionService::parse_amount(" 12,50 ").unwrap(), 12.50);
        assert!(TransactionService::parse_amount("abc").is_err());
        assert!(TransactionService::parse_amount("-1").is_err());
    }

    #[test]
    fn remove_of_unknown_id_is_a_noop() {
        let mut month = base_month();
        TransactionService::add(&mut month, PotId::PotA, 5.0, "x").unwrap();
        let removed = TransactionService::remove(&mut month, Uuid::new_v4());
        assert!(!removed);
        assert_eq!(month.transactions.len(), 1);
    }

    #[test]
    fn reset_pot_leaves_the_other_pot_alone() {
        let mut month = base_month();
        TransactionService::add(&mut month, PotId::PotA, 1.0, "a").unwrap();
        TransactionService::add(&mut month, PotId::PotA, 2.0, "b").unwrap();
        TransactionService::add(&mut month, PotId::PotB, 3.0, "c").unwrap();

        let removed = TransactionService::reset_pot(&mut month, PotId::PotA);
        assert_eq!(removed, 2);
        assert_eq!(month.transactions.len(), 1);
        assert_eq!(month.transactions[0].pot_id, PotId::PotB);
    }
}
