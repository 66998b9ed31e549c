use crate::div_rem::quo_mod;
use crate::leap::{leap_add, leap_day};
use crate::leap_offset::{leap_off, LeapOffset};

const GREGORIAN_MONTH_LENGTHS_NON_LEAP_YEAR: [u8; 12] =
    [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

// Day of a non-leap year on which each month starts. Index 0 = January.
const GREGORIAN_MONTH_STARTS_NON_LEAP_YEAR: [u16; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

const FEBRUARY: usize = 1;

/// A proleptic Gregorian calendar date. `month` is 1-12 and `day` is the 1-based
/// day of the month.
///
/// Dates produced by this crate are always valid and order chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LeapDate {
    pub year: i64,
    pub month: u8,
    pub day: u8,
}

impl LeapDate {
    /// Build a date as given. Nothing is checked; use [`leap_from`] to roll an
    /// out-of-range month or day into a valid date.
    pub fn new(year: i64, month: u8, day: u8) -> Self {
        LeapDate { year, month, day }
    }

    pub fn from_abs(day: i64) -> Self {
        leap_abs_date(day)
    }

    pub fn to_abs(&self) -> i64 {
        leap_abs_from(self.year, i64::from(self.month), i64::from(self.day))
    }

    pub fn to_offset(&self) -> LeapOffset {
        leap_from(self.year, i64::from(self.month), i64::from(self.day))
    }
}

// Roll `month` (1-based, any value) into `year`. Returns the adjusted year and
// the zero-based month index.
fn resolve_month(year: i64, month: i64) -> (i64, usize) {
    let qm = quo_mod(month - 1, 12);
    (year + qm.quo, qm.modulo as usize)
}

/// Number of days in `month` of `year`. Months outside 1-12 roll into the
/// neighbouring years, so month 0 is December of the previous year.
pub fn days_in_month(year: i64, month: i64) -> i64 {
    let (year, index) = resolve_month(year, month);
    let days = i64::from(GREGORIAN_MONTH_LENGTHS_NON_LEAP_YEAR[index]);
    if index == FEBRUARY {
        days + leap_add(year)
    } else {
        days
    }
}

/// Zero-based day of the year on which `month` starts.
///
/// Months outside 1-12 roll the same way as in [`days_in_month`]; the result is
/// then relative to the rolled year, not to `year`.
pub fn day_of_year_start(year: i64, month: i64) -> i64 {
    let (year, index) = resolve_month(year, month);
    let start = i64::from(GREGORIAN_MONTH_STARTS_NON_LEAP_YEAR[index]);
    if index > FEBRUARY {
        start + leap_add(year)
    } else {
        start
    }
}

/// Calendar date for a day offset from the start of `year`. The offset may be
/// negative or larger than the year.
pub fn leap_date(year: i64, day: i64) -> LeapDate {
    let LeapOffset { year, mut day } = leap_off(year, day);
    let mut month = 1;
    loop {
        let days = days_in_month(year, month);
        if day < days {
            break;
        }
        day -= days;
        month += 1;
    }
    // Normalization keeps the offset inside the year, so December is the last
    // month the scan can reach.
    debug_assert!((1..=12).contains(&month));
    LeapDate {
        year,
        month: month as u8,
        day: (day + 1) as u8,
    }
}

pub fn leap_date_from_off(off: LeapOffset) -> LeapDate {
    leap_date(off.year, off.day)
}

/// Normalized day offset of a calendar date.
///
/// Neither `month` nor `day` has to be in range: month 0 or 13 rolls into the
/// adjacent year and day 0 or a negative day rolls back into earlier months.
pub fn leap_from(year: i64, month: i64, day: i64) -> LeapOffset {
    let (year, index) = resolve_month(year, month);
    let month = index as i64 + 1;
    leap_off(year, day_of_year_start(year, month) + day - 1)
}

/// Absolute day of a calendar date, counted from 0000-01-01.
pub fn leap_abs_from(year: i64, month: i64, day: i64) -> i64 {
    let off = leap_from(year, month, day);
    leap_day(off.year) + off.day
}

/// Calendar date of an absolute day.
pub fn leap_abs_date(day: i64) -> LeapDate {
    leap_date(0, day)
}
