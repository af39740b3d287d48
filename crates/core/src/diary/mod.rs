//! Daily-note discovery by date.

pub mod calendar;
pub mod index;

pub use calendar::{calendar_days, date_key, day_key, days_in_year, is_leap_year, year_dates};
pub use index::{DiaryIndex, build_index, classify_year};
