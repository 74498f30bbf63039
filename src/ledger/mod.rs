//! Recurring-series models and the pure date engine that projects them.

pub mod dates;
pub mod frequency;
pub mod schedule;
pub mod series;
pub mod transaction;

pub use dates::{format_iso, parse_date};
pub use frequency::{Frequency, Step};
pub use schedule::{find_most_recent_due, project_future, MAX_STEPS_PER_PROJECTION};
pub use series::RecurringSeries;
pub use transaction::{AccountType, PredictedTransaction, Transaction, TransactionKind};
