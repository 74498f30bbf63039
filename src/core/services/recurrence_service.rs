//! Services that turn recurring series into realized and predicted transactions.

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::clock::Clock;
use crate::ledger::{
    parse_date, Frequency, PredictedTransaction, RecurringSeries, Transaction, TransactionKind,
};

use super::{ServiceError, ServiceResult};

/// Default number of predictions produced per series.
pub const DEFAULT_UPCOMING_COUNT: usize = 2;
/// Longest cursor walk `next_dates` will produce.
pub const MAX_CURSOR_WALK: usize = 1024;

/// Aggregate view over a set of predicted transactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpcomingTotals {
    pub count: usize,
    pub projected_inflow: f64,
    pub projected_outflow: f64,
    pub net: f64,
}

impl UpcomingTotals {
    pub fn from_predictions(predictions: &[PredictedTransaction]) -> Self {
        let mut totals = UpcomingTotals {
            count: predictions.len(),
            ..UpcomingTotals::default()
        };
        for item in predictions {
            match item.kind {
                TransactionKind::Income => totals.projected_inflow += item.amount,
                TransactionKind::Expense => totals.projected_outflow += item.amount,
            }
        }
        totals.net = totals.projected_inflow - totals.projected_outflow;
        totals
    }
}

pub struct RecurrenceService;

impl RecurrenceService {
    /// Builds realized-transaction drafts for every series with an occurrence due on
    /// `today` that is not already present in `existing`.
    ///
    /// The drafts are not persisted; the caller stores them and feeds them back through
    /// `existing` on the next run.
    pub fn generate_due(
        series: &[RecurringSeries],
        today: NaiveDate,
        existing: &[Transaction],
    ) -> Vec<Transaction> {
        let mut created: Vec<Transaction> = Vec::new();

        for item in series {
            let Some(due) = item.due_on(today) else {
                continue;
            };
            let duplicate = existing
                .iter()
                .chain(created.iter())
                .any(|txn| txn.matches_occurrence(item, due));
            if duplicate {
                tracing::debug!(series = %item.id, %due, "occurrence already realized");
                continue;
            }
            tracing::debug!(series = %item.id, %due, "realizing due occurrence");
            created.push(Transaction::from_series(item, due));
        }

        created
    }

    /// Same as [`RecurrenceService::generate_due`], reading "today" from `clock`.
    pub fn generate_due_now(
        clock: &dyn Clock,
        series: &[RecurringSeries],
        existing: &[Transaction],
    ) -> Vec<Transaction> {
        Self::generate_due(series, clock.today(), existing)
    }

    /// Predicts up to `per_series` upcoming occurrences for each series and merges them
    /// into a single list ordered by date.
    pub fn predict_upcoming(
        series: &[RecurringSeries],
        today: NaiveDate,
        per_series: usize,
    ) -> Vec<PredictedTransaction> {
        let mut predictions: Vec<PredictedTransaction> = series
            .iter()
            .flat_map(|item| {
                item.upcoming(today, per_series)
                    .into_iter()
                    .map(move |date| PredictedTransaction::from_series(item, date))
            })
            .collect();
        predictions.sort_by_key(|prediction| prediction.date);
        tracing::debug!(
            series = series.len(),
            predictions = predictions.len(),
            "predicted upcoming transactions"
        );
        predictions
    }

    /// Same as [`RecurrenceService::predict_upcoming`], reading "today" from `clock`.
    pub fn predict_upcoming_now(
        clock: &dyn Clock,
        series: &[RecurringSeries],
        per_series: usize,
    ) -> Vec<PredictedTransaction> {
        Self::predict_upcoming(series, clock.today(), per_series)
    }

    /// Resolves the reference day: an explicit date when given, otherwise `clock`'s today.
    pub fn resolve_today(raw: Option<&str>, clock: &dyn Clock) -> ServiceResult<NaiveDate> {
        match raw {
            Some(value) => Ok(parse_date(value)?),
            None => Ok(clock.today()),
        }
    }

    pub fn upcoming_totals(predictions: &[PredictedTransaction]) -> UpcomingTotals {
        UpcomingTotals::from_predictions(predictions)
    }

    /// Walks the cursor `count` periods forward from `from`, one step at a time.
    pub fn next_dates(
        frequency: &Frequency,
        from: NaiveDate,
        count: usize,
    ) -> ServiceResult<Vec<NaiveDate>> {
        if count == 0 || count > MAX_CURSOR_WALK {
            return Err(ServiceError::Invalid(format!(
                "count must be between 1 and {MAX_CURSOR_WALK}, got {count}"
            )));
        }
        let mut dates = Vec::with_capacity(count);
        let mut cursor = from;
        for _ in 0..count {
            let next = frequency.advance(cursor);
            if next == cursor {
                break;
            }
            dates.push(next);
            cursor = next;
        }
        Ok(dates)
    }
}
