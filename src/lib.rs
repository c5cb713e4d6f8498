#![doc(test(attr(deny(warnings))))]

//! Stipend Core manages scholarship disbursement certificates: a validated
//! record type, an ordered registry with derived read-only views, and CSV
//! persistence in the format the reference tooling reads and writes.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod registry;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Stipend Core tracing initialized.");
    });
}
