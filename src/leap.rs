// Day 0 is the first day of year 0. Year 0 is a leap year under the Gregorian
// rule (it is divisible by 400), so year 1 starts on day 366.

use num_integer::Integer;

use crate::div_rem::quo_mod;

/// Absolute day of 1900-01-01.
pub const LEAP_MCM: i64 = 693_961;

/// Absolute day of 1970-01-01, the Unix epoch. 25,567 days after [`LEAP_MCM`].
pub const UNIX_EPOCH_DAY: i64 = 719_528;

/// Whether `year` is a leap year in the proleptic Gregorian calendar. Defined for
/// all years, including zero and negative years.
pub fn is_leap(year: i64) -> bool {
    year.is_multiple_of(&4) && (!year.is_multiple_of(&100) || year.is_multiple_of(&400))
}

/// Days a year adds on top of 365: one for a leap year, otherwise zero.
pub fn leap_add(year: i64) -> i64 {
    i64::from(is_leap(year))
}

pub fn days_in_year(year: i64) -> i64 {
    365 + leap_add(year)
}

/// Leap years counted from year 1 through `year` inclusive. For negative `year`
/// the count runs the other way and comes out negative, so that
/// `leap_thru(b) - leap_thru(a)` is the number of leap years in `a+1..=b` for
/// any `a <= b`.
pub fn leap_thru(year: i64) -> i64 {
    quo_mod(year, 4).quo - quo_mod(year, 100).quo + quo_mod(year, 400).quo
}

/// Absolute day on which `year` begins.
///
/// `leap_thru(year - 1)` leaves out year 0 itself, hence the extra day.
pub fn leap_day(year: i64) -> i64 {
    year * 365 + leap_thru(year - 1) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap() {
        assert!(is_leap(0));
        assert!(is_leap(4));
        assert!(is_leap(1600));
        assert!(is_leap(2000));
        assert!(is_leap(2024));
        assert!(!is_leap(1));
        assert!(!is_leap(100));
        assert!(!is_leap(1900));
        assert!(!is_leap(2023));
        assert!(!is_leap(2100));

        assert!(is_leap(-4));
        assert!(is_leap(-400));
        assert!(!is_leap(-1));
        assert!(!is_leap(-100));
    }

    #[test]
    fn test_leap_add() {
        assert_eq!(leap_add(2000), 1);
        assert_eq!(leap_add(1900), 0);
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2023), 365);
    }

    #[test]
    fn test_leap_thru() {
        assert_eq!(leap_thru(0), 0);
        assert_eq!(leap_thru(1), 0);
        assert_eq!(leap_thru(2), 0);
        assert_eq!(leap_thru(3), 0);
        assert_eq!(leap_thru(4), 1);
        assert_eq!(leap_thru(5), 1);
        assert_eq!(leap_thru(100), 24);
        assert_eq!(leap_thru(101), 24);
        assert_eq!(leap_thru(200), 48);
        assert_eq!(leap_thru(201), 48);
        assert_eq!(leap_thru(400), 97);
        assert_eq!(leap_thru(401), 97);
        assert_eq!(1900 * 365 + leap_thru(1900), 693_960);
    }

    #[test]
    fn test_leap_thru_counts_across_zero() {
        // Year 0 is the only leap year in -3..=0.
        assert_eq!(leap_thru(0) - leap_thru(-4), 1);
        assert_eq!(leap_thru(-1), -1);
        for year in -1200..=1200 {
            assert_eq!(
                leap_thru(year) - leap_thru(year - 1),
                leap_add(year),
                "year {year}"
            );
        }
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(leap_day(0), 0);
        assert_eq!(leap_day(1), 366);
        assert_eq!(leap_day(1900), 693_961);
        assert_eq!(leap_day(1970) - leap_day(1900), 25_567);
        assert_eq!(leap_day(1900), LEAP_MCM);
        assert_eq!(leap_day(1970), UNIX_EPOCH_DAY);
    }

    #[test]
    fn test_leap_day_steps_by_year_length() {
        for year in -2000..=3000 {
            assert_eq!(
                leap_day(year + 1) - leap_day(year),
                days_in_year(year),
                "year {year}"
            );
        }
        // One Gregorian cycle.
        assert_eq!(leap_day(2400) - leap_day(2000), 146_097);
        assert_eq!(leap_day(0) - leap_day(-400), 146_097);
    }
}
