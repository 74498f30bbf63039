use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    dates,
    frequency::Frequency,
    schedule,
    transaction::{AccountType, TransactionKind},
};

/// Template for a transaction that repeats on a schedule.
///
/// Only `frequency`, `start_date`, and `end_date` drive the date logic; the remaining
/// fields are carried through to realized and predicted transactions untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurringSeries {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    #[serde(rename = "type", default)]
    pub kind: TransactionKind,
    #[serde(rename = "account_type", default)]
    pub account: AccountType,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub frequency: Frequency,
    #[serde(deserialize_with = "dates::deserialize_day")]
    pub start_date: NaiveDate,
    #[serde(default, deserialize_with = "dates::deserialize_optional_day")]
    pub end_date: Option<NaiveDate>,
}

impl RecurringSeries {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            kind: TransactionKind::default(),
            account: AccountType::default(),
            category_id: None,
            category_name: None,
            description: None,
            frequency,
            start_date,
            end_date: None,
        }
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_account(mut self, account: AccountType) -> Self {
        self.account = account;
        self
    }

    pub fn with_category(mut self, id: Uuid, name: impl Into<String>) -> Self {
        self.category_id = Some(id);
        self.category_name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_recurring(&self) -> bool {
        self.frequency.is_recurring()
    }

    /// An end date before the start date describes a series with no occurrences.
    pub fn has_valid_range(&self) -> bool {
        self.end_date.map_or(true, |end| end >= self.start_date)
    }

    /// Most recent occurrence due on or before `today`.
    ///
    /// Non-recurring series, series that have not started, and series whose end date
    /// has already passed have nothing due.
    pub fn due_on(&self, today: NaiveDate) -> Option<NaiveDate> {
        if !self.is_recurring() || !self.has_valid_range() || self.start_date > today {
            return None;
        }
        if self.end_date.is_some_and(|end| end < today) {
            return None;
        }
        schedule::find_most_recent_due(self.start_date, &self.frequency, today)
    }

    /// Next `count` occurrence dates on or after `today`, bounded by the end date.
    pub fn upcoming(&self, today: NaiveDate, count: usize) -> Vec<NaiveDate> {
        if !self.is_recurring() {
            return Vec::new();
        }
        schedule::project_future(self.start_date, &self.frequency, count, today, self.end_date)
    }
}
