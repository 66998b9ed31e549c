//! Days counted from the Unix epoch, 1970-01-01.

use crate::leap::UNIX_EPOCH_DAY;
use crate::leap_date::{leap_abs_from, leap_date, LeapDate};

/// Days from 1970-01-01 to the given date. Out-of-range months and days roll
/// as in [`leap_from`](crate::leap_from).
pub fn unix_day_from_date(year: i64, month: i64, day: i64) -> i64 {
    leap_abs_from(year, month, day) - UNIX_EPOCH_DAY
}

pub fn date_from_unix_day(day: i64) -> LeapDate {
    leap_date(1970, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leap::leap_day;

    #[test]
    fn test_unix_day_from_date() {
        assert_eq!(unix_day_from_date(1970, 1, 1), 0);
        assert_eq!(unix_day_from_date(1969, 12, 31), -1);
        assert_eq!(unix_day_from_date(2000, 1, 1), 10_957);
        // 2000-03-01, right after the leap day that ends a 400-year cycle.
        assert_eq!(unix_day_from_date(2000, 3, 1), 11_017);
        assert_eq!(unix_day_from_date(1900, 1, 1), -25_567);
        assert_eq!(unix_day_from_date(1970, 0, 1), -31);
    }

    #[test]
    fn test_date_from_unix_day() {
        assert_eq!(date_from_unix_day(0), LeapDate::new(1970, 1, 1));
        assert_eq!(date_from_unix_day(-1), LeapDate::new(1969, 12, 31));
        assert_eq!(date_from_unix_day(11_016), LeapDate::new(2000, 2, 29));
        assert_eq!(date_from_unix_day(19_723), LeapDate::new(2024, 1, 1));
        assert_eq!(
            date_from_unix_day(leap_day(2100) - UNIX_EPOCH_DAY),
            LeapDate::new(2100, 1, 1)
        );
    }

    #[test]
    fn test_unix_day_round_trip() {
        for day in -200_000..=200_000 {
            let date = date_from_unix_day(day);
            assert_eq!(
                unix_day_from_date(date.year, i64::from(date.month), i64::from(date.day)),
                day
            );
            assert_eq!(date, LeapDate::from_abs(day + UNIX_EPOCH_DAY));
        }
    }
}
