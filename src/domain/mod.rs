//! Pure domain models (document, months, pots, transactions).
//! No I/O, no storage. Only data types and core enums.

pub mod document;
pub mod month;
pub mod pot;
pub mod transaction;

pub use document::*;
pub use month::*;
pub use pot::*;
pub use transaction::*;
