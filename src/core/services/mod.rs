pub mod recurrence_service;

pub use recurrence_service::{
    RecurrenceService, UpcomingTotals, DEFAULT_UPCOMING_COUNT, MAX_CURSOR_WALK,
};

use crate::errors::RecurringError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Recurring(#[from] RecurringError),
    #[error("{0}")]
    Invalid(String),
}
