//! Proleptic Gregorian calendar arithmetic on plain integers.
//!
//! Days are counted from day 0, the first day of year 0. Year 0 is a leap year,
//! so year 1 starts on day 366. The core conversions are
//!
//! - [`leap_off`]: normalize a day offset into its year,
//! - [`leap_date`]: day offset to calendar date,
//! - [`leap_from`]: calendar date (month and day may be out of range) to day offset,
//! - [`leap_abs_from`] / [`leap_abs_date`]: calendar date to and from an absolute day.
//!
//! All of them are built on [`quo_mod`], a floored division whose remainder
//! takes the sign of the divisor, which keeps them correct for negative years
//! and offsets.
//!
//! Everything works on `i64`. Years up to about ±10^12 and day counts up to about
//! ±3.6 * 10^14 are supported; past that, arithmetic overflows (a panic in debug
//! builds, wrapping in release builds).

pub use div_rem::{checked_quo_mod, quo_mod, DivisionByZero, QuoMod, QuoModFloor};
pub use leap::{days_in_year, is_leap, leap_add, leap_day, leap_thru, LEAP_MCM, UNIX_EPOCH_DAY};
pub use leap_date::{
    day_of_year_start, days_in_month, leap_abs_date, leap_abs_from, leap_date,
    leap_date_from_off, leap_from, LeapDate,
};
pub use leap_offset::{leap_off, LeapOffset};
pub use unix::{date_from_unix_day, unix_day_from_date};

pub use leap_date::leap_abs_date as date_from_absolute_day;
pub use leap_date::leap_abs_from as absolute_day_from_date;
pub use leap_date::leap_date as date_from_offset;
pub use leap_date::leap_from as offset_from_date;
pub use leap_offset::leap_off as normalize_day_offset;

mod div_rem;
#[cfg(all(unix, any(test, feature = "host")))]
pub mod host;
mod leap;
mod leap_date;
mod leap_offset;
mod unix;
