//! Services that sit between the date engine and the application: clock access,
//! due-transaction generation, and upcoming-transaction prediction.

pub mod clock;
pub mod services;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
