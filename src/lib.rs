#![doc(test(attr(deny(warnings))))]

//! Envelope Core offers the ledger, provisioning, and aggregation primitives
//! behind a two-pot monthly envelope budget, persisted as a single JSON
//! document.

pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Envelope Core tracing initialized.");
    });
}
