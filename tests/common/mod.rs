#![allow(dead_code)]

use chrono::NaiveDate;
use recurring_core::ledger::{AccountType, Frequency, RecurringSeries, TransactionKind};
use tempfile::TempDir;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// A household's worth of series covering day-, week-, and month-based frequencies.
pub fn household_series() -> Vec<RecurringSeries> {
    vec![
        RecurringSeries::new("Rent", 1500.0, Frequency::Monthly, date(2025, 1, 31))
            .with_account(AccountType::Checking),
        RecurringSeries::new("Salary", 3100.0, Frequency::BiWeekly, date(2025, 1, 3))
            .with_kind(TransactionKind::Income)
            .with_account(AccountType::Checking),
        RecurringSeries::new("Streaming", 15.99, Frequency::Monthly, date(2025, 2, 14))
            .with_description("Video"),
        RecurringSeries::new("Car insurance", 540.0, Frequency::SemiAnnually, date(2024, 8, 31)),
        RecurringSeries::new("Gym", 45.0, Frequency::Weekly, date(2025, 1, 6))
            .with_end_date(date(2025, 3, 31)),
    ]
}

/// Creates an isolated data directory; keep the guard alive for the test's duration.
pub fn setup_test_env() -> TempDir {
    TempDir::new().expect("create temp dir")
}
