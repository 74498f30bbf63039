mod common;

use std::collections::HashSet;

use common::{date, household_series};
use recurring_core::{
    core::{services::RecurrenceService, FixedClock},
    ledger::{Frequency, RecurringSeries, TransactionKind},
};

#[test]
fn due_generation_realizes_latest_occurrence_per_series() {
    let series = household_series();
    let created = RecurrenceService::generate_due(&series, date(2025, 3, 15), &[]);

    let by_name: Vec<_> = created.iter().map(|txn| (txn.name.as_str(), txn.date)).collect();
    assert_eq!(
        by_name,
        vec![
            ("Rent", date(2025, 2, 28)),
            ("Salary", date(2025, 3, 14)),
            ("Streaming", date(2025, 3, 14)),
            ("Car insurance", date(2025, 2, 28)),
            ("Gym", date(2025, 3, 10)),
        ]
    );
    assert!(created
        .iter()
        .zip(&series)
        .all(|(txn, source)| txn.series_id == Some(source.id)));
}

#[test]
fn feeding_drafts_back_makes_generation_idempotent() {
    let series = household_series();
    let today = date(2025, 3, 15);
    let first = RecurrenceService::generate_due(&series, today, &[]);
    let second = RecurrenceService::generate_due(&series, today, &first);
    assert!(second.is_empty(), "already realized occurrences must not repeat");
}

#[test]
fn ended_series_stop_generating() {
    let series = household_series();
    let clock = FixedClock(date(2025, 4, 2));
    let created = RecurrenceService::generate_due_now(&clock, &series, &[]);
    assert!(created.iter().all(|txn| txn.name != "Gym"));
    assert_eq!(created.len(), 4);
}

#[test]
fn non_recurring_series_are_filtered() {
    let series = vec![RecurringSeries::new(
        "Laptop",
        1200.0,
        Frequency::Never,
        date(2025, 1, 1),
    )];
    let today = date(2025, 6, 1);
    assert!(RecurrenceService::generate_due(&series, today, &[]).is_empty());
    assert!(RecurrenceService::predict_upcoming(&series, today, 3).is_empty());
}

#[test]
fn unknown_frequencies_fall_back_to_monthly() {
    let series = vec![RecurringSeries::new(
        "Cleaner",
        80.0,
        Frequency::from("Working Days Only"),
        date(2025, 1, 10),
    )];
    let today = date(2025, 3, 20);
    let created = RecurrenceService::generate_due(&series, today, &[]);
    assert_eq!(created[0].date, date(2025, 3, 10));
    let upcoming = RecurrenceService::predict_upcoming(&series, today, 2);
    let dates: Vec<_> = upcoming.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![date(2025, 4, 10), date(2025, 5, 10)]);
}

#[test]
fn upcoming_list_is_merged_across_series() {
    let series = household_series();
    let predictions = RecurrenceService::predict_upcoming(&series, date(2025, 3, 15), 2);

    assert_eq!(predictions.len(), 10);
    assert!(predictions.windows(2).all(|pair| pair[0].date <= pair[1].date));
    assert_eq!(predictions[0].name, "Gym");
    assert_eq!(predictions[0].date, date(2025, 3, 17));
    assert_eq!(predictions.last().map(|p| p.date), Some(date(2026, 2, 28)));

    let ids: HashSet<_> = predictions.iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids.len(), predictions.len());
    assert!(predictions.iter().all(|p| p.predicted));
    let streaming = predictions
        .iter()
        .find(|p| p.name == "Streaming")
        .expect("streaming prediction");
    assert_eq!(streaming.description, "Video (Upcoming)");
}

#[test]
fn upcoming_totals_balance_income_against_expenses() {
    let series = household_series();
    let predictions = RecurrenceService::predict_upcoming(&series, date(2025, 3, 15), 2);
    let totals = RecurrenceService::upcoming_totals(&predictions);

    let income: f64 = predictions
        .iter()
        .filter(|p| p.kind == TransactionKind::Income)
        .map(|p| p.amount)
        .sum();
    assert_eq!(totals.count, 10);
    assert!((totals.projected_inflow - 6200.0).abs() < 1e-9);
    assert!((totals.projected_inflow - income).abs() < 1e-9);
    assert!((totals.projected_outflow - 4201.98).abs() < 1e-6);
    assert!((totals.net - (6200.0 - 4201.98)).abs() < 1e-6);
}
