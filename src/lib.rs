#![doc(test(attr(deny(warnings))))]

//! Tally Core keeps a personal ledger of income and expense entries, persists
//! it as a single JSON blob, and derives the totals and monthly groupings
//! consumed by the text-mode dashboard.

pub mod cli;
pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Tally Core tracing initialized.");
    });
}
