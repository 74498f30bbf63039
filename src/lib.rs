#![doc(test(attr(deny(warnings))))]

//! Recurring Core projects recurring transactions: it finds the occurrence of a series
//! that is due today and predicts the ones coming up next.
//!
//! ```
//! use chrono::NaiveDate;
//! use recurring_core::ledger::{find_most_recent_due, Frequency};
//!
//! let start = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
//! let today = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
//! let due = find_most_recent_due(start, &Frequency::Monthly, today);
//! assert_eq!(due, NaiveDate::from_ymd_opt(2025, 2, 28));
//! ```

pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Recurring Core tracing initialized.");
    });
}
