pub mod month_service;
pub mod pot_service;
pub mod summary_service;
pub mod transaction_service;

pub use month_service::MonthService;
pub use pot_service::PotService;
pub use summary_service::{PotTotals, SummaryService};
pub use transaction_service::TransactionService;

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    Invalid(String),
}
