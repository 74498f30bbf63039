use std::{convert::Infallible, fmt, str::FromStr};

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Period between successive occurrences of a recurring series.
///
/// Labels match the values stored by the application (`"Bi-Weekly"`, `"Semi-Annually"`, ...).
/// Labels the engine cannot step are kept verbatim in [`Frequency::Unknown`] and advance
/// like [`Frequency::Monthly`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Frequency {
    Daily,
    Weekly,
    BiWeekly,
    TriWeekly,
    Monthly,
    BiMonthly,
    Quarterly,
    SemiAnnually,
    Annually,
    /// Marks a transaction that does not repeat.
    Never,
    Unknown(String),
}

/// How a frequency moves the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Days(i64),
    Months(u32),
}

impl Frequency {
    pub const ALL: [Frequency; 9] = [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::BiWeekly,
        Frequency::TriWeekly,
        Frequency::Monthly,
        Frequency::BiMonthly,
        Frequency::Quarterly,
        Frequency::SemiAnnually,
        Frequency::Annually,
    ];

    pub fn label(&self) -> &str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::BiWeekly => "Bi-Weekly",
            Frequency::TriWeekly => "Tri-Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::BiMonthly => "Bi-Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::SemiAnnually => "Semi-Annually",
            Frequency::Annually => "Annually",
            Frequency::Never => "Never",
            Frequency::Unknown(label) => label,
        }
    }

    pub fn is_recurring(&self) -> bool {
        !matches!(self, Frequency::Never)
    }

    /// Rough period length in days, for sorting and comparing series.
    pub fn approximate_days(&self) -> u32 {
        match self {
            Frequency::Daily => 1,
            Frequency::Weekly => 7,
            Frequency::BiWeekly => 14,
            Frequency::TriWeekly => 21,
            Frequency::Monthly => 30,
            Frequency::BiMonthly => 60,
            Frequency::Quarterly => 90,
            Frequency::SemiAnnually => 180,
            Frequency::Annually => 365,
            Frequency::Never | Frequency::Unknown(_) => 30,
        }
    }

    /// Returns the cursor step for this frequency. Labels without a step of their own
    /// fall back to one month.
    pub fn step(&self) -> Step {
        match self {
            Frequency::Daily => Step::Days(1),
            Frequency::Weekly => Step::Days(7),
            Frequency::BiWeekly => Step::Days(14),
            Frequency::TriWeekly => Step::Days(21),
            Frequency::Monthly => Step::Months(1),
            Frequency::BiMonthly => Step::Months(2),
            Frequency::Quarterly => Step::Months(3),
            Frequency::SemiAnnually => Step::Months(6),
            Frequency::Annually => Step::Months(12),
            Frequency::Never | Frequency::Unknown(_) => {
                tracing::warn!(
                    frequency = self.label(),
                    "unsupported frequency, defaulting to Monthly"
                );
                Step::Months(1)
            }
        }
    }

    /// Returns the date exactly one period after `date`.
    pub fn advance(&self, date: NaiveDate) -> NaiveDate {
        self.advance_by(date, 1)
    }

    /// Returns the date `periods` periods after `anchor`, measured from the anchor so
    /// the anchor's day-of-month survives short months along the way.
    ///
    /// Dates outside chrono's range saturate to `anchor`.
    pub fn advance_by(&self, anchor: NaiveDate, periods: u32) -> NaiveDate {
        if periods == 0 {
            return anchor;
        }
        match self.step() {
            Step::Days(days) => Duration::try_days(days * i64::from(periods))
                .and_then(|delta| anchor.checked_add_signed(delta))
                .unwrap_or(anchor),
            Step::Months(months) => months
                .checked_mul(periods)
                .and_then(|total| shift_month(anchor, total))
                .unwrap_or(anchor),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for Frequency {
    fn from(label: &str) -> Self {
        match label.trim() {
            "Daily" | "daily" => Frequency::Daily,
            "Weekly" | "weekly" => Frequency::Weekly,
            "Bi-Weekly" => Frequency::BiWeekly,
            "Tri-Weekly" => Frequency::TriWeekly,
            "Monthly" | "monthly" => Frequency::Monthly,
            "Bi-Monthly" => Frequency::BiMonthly,
            "Quarterly" => Frequency::Quarterly,
            "Semi-Annually" => Frequency::SemiAnnually,
            "Annually" | "yearly" => Frequency::Annually,
            "Never" => Frequency::Never,
            _ => Frequency::Unknown(label.to_string()),
        }
    }
}

impl From<String> for Frequency {
    fn from(label: String) -> Self {
        Frequency::from(label.as_str())
    }
}

impl From<Frequency> for String {
    fn from(frequency: Frequency) -> Self {
        match frequency {
            Frequency::Unknown(label) => label,
            other => other.label().to_string(),
        }
    }
}

impl FromStr for Frequency {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Frequency::from(s))
    }
}

/// Moves `date` forward by `months`, clamping the day to the end of the target month.
fn shift_month(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    let month_index = i64::from(date.month0()) + i64::from(months);
    let year = i64::from(date.year()) + month_index.div_euclid(12);
    let year = i32::try_from(year).ok()?;
    let month = u32::try_from(month_index.rem_euclid(12)).ok()? + 1;
    let day = date.day().min(days_in_month(year, month)?);
    NaiveDate::from_ymd_opt(year, month, day)
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    first_next.pred_opt().map(|last| last.day())
}
