pub mod json_backend;

use crate::{domain::LedgerDocument, errors::LedgerError};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends holding the single ledger document.
pub trait StorageBackend: Send + Sync {
    /// Reads the persisted document; `Ok(None)` when nothing was stored yet.
    fn load(&self) -> Result<Option<LedgerDocument>>;

    /// Serializes and writes the full document. Total for any value
    /// satisfying the data model; write failures surface as errors.
    fn save(&self, document: &LedgerDocument) -> Result<()>;
}

pub use json_backend::JsonStorage;
