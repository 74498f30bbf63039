use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    dates::{self, format_iso},
    frequency::Frequency,
    series::RecurringSeries,
};

const REALIZED_NOTE: &str = "From recurring transaction";
const PREDICTED_NOTE: &str = "Upcoming";
const PREDICTED_FALLBACK: &str = "Upcoming transaction";
const UNCATEGORIZED: &str = "Uncategorized";
const AMOUNT_TOLERANCE: f64 = 0.005;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TransactionKind {
    #[default]
    Expense,
    Income,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum AccountType {
    #[default]
    Cash,
    Savings,
    Checking,
}

/// A realized transaction. Drafts built from a series carry the series id so callers can
/// link them back when persisting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_id: Option<Uuid>,
    #[serde(deserialize_with = "dates::deserialize_day")]
    pub date: NaiveDate,
    pub name: String,
    pub amount: f64,
    #[serde(rename = "type", default)]
    pub kind: TransactionKind,
    #[serde(rename = "account_type", default)]
    pub account: AccountType,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "recurring_frequency", default = "Transaction::one_off")]
    pub frequency: Frequency,
}

impl Transaction {
    pub fn new(name: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            series_id: None,
            date,
            name: name.into(),
            amount,
            kind: TransactionKind::default(),
            account: AccountType::default(),
            category_id: None,
            description: None,
            frequency: Frequency::Never,
        }
    }

    /// Materializes the occurrence of `series` falling on `date`.
    pub fn from_series(series: &RecurringSeries, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            series_id: Some(series.id),
            date,
            name: series.name.clone(),
            amount: series.amount,
            kind: series.kind,
            account: series.account,
            category_id: series.category_id,
            description: Some(annotate(series.description.as_deref(), REALIZED_NOTE)),
            frequency: series.frequency.clone(),
        }
    }

    /// Whether this transaction already stands for the occurrence of `series` on `date`.
    /// Matches on date, name, and amount.
    pub fn matches_occurrence(&self, series: &RecurringSeries, date: NaiveDate) -> bool {
        self.date == date
            && self.name == series.name
            && (self.amount - series.amount).abs() < AMOUNT_TOLERANCE
    }

    fn one_off() -> Frequency {
        Frequency::Never
    }
}

/// Hypothetical future occurrence of a series. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictedTransaction {
    pub id: String,
    pub series_id: Uuid,
    pub date: NaiveDate,
    pub name: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(rename = "account_type")]
    pub account: AccountType,
    pub category_id: Option<Uuid>,
    pub category_name: String,
    pub description: String,
    #[serde(rename = "recurring_frequency")]
    pub frequency: Frequency,
    pub predicted: bool,
}

impl PredictedTransaction {
    pub fn from_series(series: &RecurringSeries, date: NaiveDate) -> Self {
        let description = match series.description.as_deref() {
            Some(text) if !text.trim().is_empty() => format!("{text} ({PREDICTED_NOTE})"),
            _ => PREDICTED_FALLBACK.to_string(),
        };
        Self {
            id: format!("{}-{}", series.id, format_iso(date)),
            series_id: series.id,
            date,
            name: series.name.clone(),
            amount: series.amount,
            kind: series.kind,
            account: series.account,
            category_id: series.category_id,
            category_name: series
                .category_name
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
            description,
            frequency: series.frequency.clone(),
            predicted: true,
        }
    }
}

fn annotate(description: Option<&str>, note: &str) -> String {
    match description {
        Some(text) if !text.trim().is_empty() => format!("{text} ({note})"),
        _ => note.to_string(),
    }
}
