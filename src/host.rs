//! Day counts from the host C library, used to cross-check the calendar
//! arithmetic in this crate. Compiled for tests, and otherwise only with the
//! `host` feature.

use std::os::raw::c_int;

use thiserror::Error;
use tracing::warn;

use crate::div_rem::quo_mod;
use crate::leap::leap_day;

const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCalendarError {
    #[error("date component {0} does not fit in a C int")]
    OutOfRange(i64),
    #[error("timegm rejected {year:04}-{month:02}-{day:02}")]
    Rejected { year: i64, month: i64, day: i64 },
}

fn to_c_int(value: i64) -> Result<c_int, HostCalendarError> {
    c_int::try_from(value).map_err(|_| HostCalendarError::OutOfRange(value))
}

/// Days from 1970-01-01 to midnight UTC on the given date, as computed by the
/// host's `timegm`. `month` and `day` are 1-based; the C library normalizes
/// out-of-range values the same way it does for `struct tm`.
pub fn mkdays(year: i64, month: i64, day: i64) -> Result<i64, HostCalendarError> {
    // SAFETY: tm is plain old data; all-zero is a valid value (a null tm_zone
    // included where the platform has one).
    let mut tm: libc::tm = unsafe { std::mem::zeroed() };
    tm.tm_year = to_c_int(year - 1900)?;
    tm.tm_mon = to_c_int(month - 1)?;
    tm.tm_mday = to_c_int(day)?;
    // SAFETY: tm is a valid, exclusively borrowed struct tm.
    let seconds = unsafe { libc::timegm(&mut tm) };
    // Midnight never maps to -1, so -1 only signals failure here.
    if seconds == -1 {
        warn!(year, month, day, "timegm failed");
        return Err(HostCalendarError::Rejected { year, month, day });
    }
    Ok(quo_mod(i64::from(seconds), SECONDS_PER_DAY).quo)
}

/// Host-computed days between January 1st of `year0` and of `year1`, minus the
/// same distance computed with [`leap_day`]. Zero when both agree.
pub fn diff_days(year1: i64, year0: i64) -> Result<i64, HostCalendarError> {
    let host = mkdays(year1, 1, 1)? - mkdays(year0, 1, 1)?;
    Ok(host - (leap_day(year1) - leap_day(year0)))
}
