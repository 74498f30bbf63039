//! Due-date and future-date computations over a recurring schedule.
//!
//! Both functions are pure: "today" is always passed in by the caller.

use chrono::{Duration, NaiveDate};

use super::frequency::{Frequency, Step};

/// Upper bound on cursor steps per requested projection date.
pub const MAX_STEPS_PER_PROJECTION: usize = 20;

/// Returns the latest occurrence of the schedule on or before `today`.
///
/// Yields `None` when the schedule starts after `today`. End dates are not considered
/// here; callers gate on them first.
pub fn find_most_recent_due(
    start: NaiveDate,
    frequency: &Frequency,
    today: NaiveDate,
) -> Option<NaiveDate> {
    if start > today {
        return None;
    }
    if start == today {
        return Some(today);
    }

    let due = match frequency.step() {
        Step::Days(1) => today,
        Step::Days(period) => {
            let elapsed = (today - start).num_days();
            start + Duration::days(elapsed.div_euclid(period) * period)
        }
        Step::Months(_) => last_occurrence_by_period(start, frequency, today),
    };

    (due <= today).then_some(due)
}

/// Walks whole periods from `start` until the next one would pass `today`.
fn last_occurrence_by_period(
    start: NaiveDate,
    frequency: &Frequency,
    today: NaiveDate,
) -> NaiveDate {
    let mut periods = 0u32;
    let mut due = start;
    loop {
        let Some(next_periods) = periods.checked_add(1) else {
            return due;
        };
        let next = frequency.advance_by(start, next_periods);
        if next > today || next <= due {
            return due;
        }
        due = next;
        periods = next_periods;
    }
}

/// Projects up to `count` occurrence dates falling within `[today, end]`, in ascending
/// order.
///
/// The walk starts at `start` and moves one period at a time so the schedule's phase is
/// kept exactly. It gives up after `count * MAX_STEPS_PER_PROJECTION` steps, so a start
/// far enough in the past can yield fewer than `count` dates.
pub fn project_future(
    start: NaiveDate,
    frequency: &Frequency,
    count: usize,
    today: NaiveDate,
    end: Option<NaiveDate>,
) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    if count == 0 || end.is_some_and(|end| end < start) {
        return dates;
    }

    let max_steps = count.saturating_mul(MAX_STEPS_PER_PROJECTION);
    let mut cursor = start;
    let mut periods = 0u32;
    let mut steps = 0usize;

    while dates.len() < count && steps < max_steps {
        steps += 1;

        if cursor >= today && end.map_or(true, |end| cursor <= end) {
            dates.push(cursor);
        }

        let Some(next_periods) = periods.checked_add(1) else {
            break;
        };
        let next = frequency.advance_by(start, next_periods);
        if next <= cursor {
            break;
        }
        if end.is_some_and(|end| next > end) {
            break;
        }
        cursor = next;
        periods = next_periods;
    }

    dates
}
