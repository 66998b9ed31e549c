use tracing::{debug, error, trace};

use crate::div_rem::quo_mod;
use crate::leap::{days_in_year, leap_day};

// Offsets within a few centuries of the starting year settle in at most two
// steps. Larger jumps converge geometrically, each step cutting the error by
// roughly the year length, so this is never reached for day counts that fit
// the supported range.
pub(crate) const MAX_NORMALIZE_ITERATIONS: u32 = 16;

/// A day offset relative to the first day of a year.
///
/// Values returned by [`leap_off`] are normalized: `0 <= day < days_in_year(year)`.
/// Normalized offsets order chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LeapOffset {
    pub year: i64,
    pub day: i64,
}

impl LeapOffset {
    /// Build an offset as given, without normalizing it.
    pub fn new(year: i64, day: i64) -> Self {
        LeapOffset { year, day }
    }

    pub fn normalize(self) -> Self {
        leap_off(self.year, self.day)
    }

    pub fn is_normalized(&self) -> bool {
        0 <= self.day && self.day < days_in_year(self.year)
    }

    /// Absolute day this offset refers to. Holds for unnormalized offsets too.
    pub fn to_abs(&self) -> i64 {
        leap_day(self.year) + self.day
    }
}

/// Normalize a day offset so that it falls inside its year.
///
/// `day` may be negative or run past the end of `year`; the result names the
/// same absolute day with `0 <= day < days_in_year(year)`.
pub fn leap_off(year: i64, day: i64) -> LeapOffset {
    normalize(year, day).0
}

/// Normalization loop. Also returns the number of rebasing steps taken.
pub(crate) fn normalize(year: i64, day: i64) -> (LeapOffset, u32) {
    let mut year = year;
    let mut day = day;
    let mut days = days_in_year(year);
    let mut steps = 0;
    while day < 0 || day >= days {
        if steps == MAX_NORMALIZE_ITERATIONS {
            error!(year, day, steps, "day offset normalization did not converge");
            panic!("day offset normalization did not converge after {steps} steps");
        }
        // Jump whole years using the current year's length. Leap days between
        // here and the target can push this one year past it, which the next
        // step corrects.
        let delta = quo_mod(day, days).quo;
        let year0 = year + delta;
        day += leap_day(year) - leap_day(year0);
        trace!(year, year0, delta, day, "rebased day offset");
        year = year0;
        days = days_in_year(year);
        steps += 1;
    }
    if steps > 1 {
        debug!(year, day, steps, "day offset took more than one rebase");
    }
    (LeapOffset { year, day }, steps)
}
