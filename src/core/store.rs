//! Exclusive owner of the in-memory ledger document and its persistence.

use uuid::Uuid;

use crate::domain::{LedgerDocument, MonthData, MonthKey, PotId, Transaction};
use crate::errors::LedgerError;
use crate::storage::StorageBackend;

use super::exchange::{self, ExportArtifact, ImportError};
use super::services::{
    MonthService, PotService, PotTotals, ServiceResult, SummaryService, TransactionService,
};

/// Facade that owns the ledger document and keeps the persisted copy in
/// sync: every mutating operation saves before returning, so no dirty state
/// survives past a single call. A failed write is surfaced to the caller
/// while the in-memory mutation stays applied; the copies diverge until the
/// next successful save.
///
/// The `&mut self` receivers give the data model's one-operation-at-a-time
/// contract for free; on a multi-threaded host, wrap the store in a mutex.
pub struct LedgerStore {
    document: LedgerDocument,
    storage: Box<dyn StorageBackend>,
}

impl LedgerStore {
    /// Loads the persisted document, falling back to a fresh bootstrap
    /// document when the store is empty or unreadable.
    pub fn open(storage: Box<dyn StorageBackend>) -> Result<Self, LedgerError> {
        let current = MonthKey::current();
        let document = match storage.load() {
            Ok(Some(document)) => document,
            Ok(None) => {
                tracing::debug!("no persisted ledger, bootstrapping");
                LedgerDocument::bootstrap(current)
            }
            Err(err) => {
                tracing::warn!("persisted ledger unreadable, bootstrapping: {err}");
                LedgerDocument::bootstrap(current)
            }
        };
        let mut store = Self { document, storage };
        let active = store.document.active_month_key;
        MonthService::ensure(&mut store.document, active);
        store.storage.save(&store.document)?;
        Ok(store)
    }

    pub fn document(&self) -> &LedgerDocument {
        &self.document
    }

    pub fn active_month_key(&self) -> MonthKey {
        self.document.active_month_key
    }

    pub fn active_pot_id(&self) -> PotId {
        self.document.active_pot_id
    }

    /// Data for the active month.
    pub fn active_month(&self) -> &MonthData {
        self.document
            .months
            .get(&self.document.active_month_key)
            .expect("active month is provisioned by every mutating operation")
    }

    /// Switches the active pot.
    pub fn select_pot(&mut self, pot_id: PotId) -> ServiceResult<()> {
        self.document.active_pot_id = pot_id;
        self.save()
    }

    /// Switches the active month, provisioning it when missing.
    pub fn select_month(&mut self, key: MonthKey) -> ServiceResult<()> {
        MonthService::select(&mut self.document, key);
        self.save()
    }

    /// Provisions `key` without changing the selection. Idempotent; an
    /// existing month is left untouched and nothing is written.
    pub fn ensure_month(&mut self, key: MonthKey) -> ServiceResult<()> {
        if MonthService::ensure(&mut self.document, key) {
            tracing::debug!(%key, "provisioned month");
            self.save()?;
        }
        Ok(())
    }

    /// Advances the selection to the month after the active one, creating
    /// it from the active month's pot configuration when needed.
    pub fn advance_month(&mut self) -> ServiceResult<MonthKey> {
        let next = MonthService::advance(&mut self.document);
        self.save()?;
        Ok(next)
    }

    /// Chronological list of known months with display labels, always
    /// including the current calendar month.
    pub fn month_listing(&mut self) -> ServiceResult<Vec<(MonthKey, String)>> {
        self.ensure_month(MonthKey::current())?;
        Ok(MonthService::listing(&self.document))
    }

    /// Records an expense against the active pot of the active month.
    pub fn add_expense(&mut self, amount: f64, note: &str) -> ServiceResult<Uuid> {
        let pot_id = self.document.active_pot_id;
        let id = TransactionService::add(self.active_month_data(), pot_id, amount, note)?;
        self.save()?;
        Ok(id)
    }

    /// Deletes an expense from the active month; unknown ids are a no-op,
    /// not an error.
    pub fn remove_expense(&mut self, id: Uuid) -> ServiceResult<bool> {
        let removed = TransactionService::remove(self.active_month_data(), id);
        self.save()?;
        Ok(removed)
    }

    /// Deletes every expense of `pot_id` in `month_key`, returning the
    /// count. Destructive and irreversible; any confirmation step belongs
    /// to the caller.
    pub fn reset_pot(&mut self, month_key: MonthKey, pot_id: PotId) -> ServiceResult<usize> {
        let removed = TransactionService::reset_pot(self.month_data_mut(month_key), pot_id);
        self.save()?;
        Ok(removed)
    }

    /// Renames a pot in one month only.
    pub fn rename_pot(
        &mut self,
        month_key: MonthKey,
        pot_id: PotId,
        new_name: &str,
    ) -> ServiceResult<()> {
        PotService::rename(self.month_data_mut(month_key), pot_id, new_name);
        self.save()
    }

    /// Sets a pot's starting budget in one month only. Past months may be
    /// edited; their remaining figures change retroactively.
    pub fn set_starting_budget(
        &mut self,
        month_key: MonthKey,
        pot_id: PotId,
        value: f64,
    ) -> ServiceResult<()> {
        PotService::set_starting_budget(self.month_data_mut(month_key), pot_id, value);
        self.save()
    }

    /// Totals for one pot of the active month.
    pub fn totals(&self, pot_id: PotId) -> PotTotals {
        SummaryService::totals(self.active_month(), pot_id)
    }

    /// Totals for one pot of any known month.
    pub fn totals_for(&self, month_key: MonthKey, pot_id: PotId) -> Option<PotTotals> {
        self.document
            .month(month_key)
            .map(|month| SummaryService::totals(month, pot_id))
    }

    /// The active pot's transactions, newest first.
    pub fn active_transactions(&self) -> Vec<&Transaction> {
        SummaryService::transactions_newest_first(self.active_month(), self.document.active_pot_id)
    }

    /// Serializes the document for download.
    pub fn export(&self) -> Result<ExportArtifact, LedgerError> {
        exchange::export(&self.document, MonthKey::current())
    }

    /// Replaces the whole document with an imported one. Full overwrite by
    /// design, not a merge; the previous state survives only when parsing
    /// or validation fails.
    pub fn import(&mut self, payload: &str) -> Result<(), ImportError> {
        let document = exchange::parse_import(payload)?;
        self.replace(document)?;
        tracing::info!("imported ledger document");
        Ok(())
    }

    /// Wholesale substitution of the in-memory document, persisted at once.
    pub fn replace(&mut self, document: LedgerDocument) -> Result<(), LedgerError> {
        self.document = document;
        let active = self.document.active_month_key;
        MonthService::ensure(&mut self.document, active);
        self.storage.save(&self.document)
    }

    fn month_data_mut(&mut self, key: MonthKey) -> &mut MonthData {
        MonthService::ensure(&mut self.document, key);
        self.document
            .month_mut(key)
            .expect("month was provisioned above")
    }

    fn active_month_data(&mut self) -> &mut MonthData {
        let key = self.document.active_month_key;
        self.month_data_mut(key)
    }

    fn save(&mut self) -> ServiceResult<()> {
        self.storage.save(&self.document)?;
        Ok(())
    }
}
