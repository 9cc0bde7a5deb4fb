//! [`Domain`] for `chrono::NaiveDate`, gated behind the `chrono` feature.
//!
//! Dates are discrete at day granularity: the day after `d` is always
//! `d + 1 day`, so `(2023-12-30, 2024-01-01)` normalizes to the single
//! point `[2023-12-31, 2023-12-31]` exactly like an integer domain, and
//! `(2023-12-31, 2024-01-01)` -- no day strictly between the two -- is
//! empty.

use chrono::{Days, NaiveDate};

use crate::bound::Side;
use crate::numeric::Domain;

impl Domain for NaiveDate {
    fn try_adjacent(&self, side: Side) -> Option<Self> {
        match side {
            Side::Left => self.checked_sub_days(Days::new(1)),
            Side::Right => self.checked_add_days(Days::new(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::FiniteFactory;
    use crate::Interval;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_is_discrete() {
        assert!(date(2024, 1, 1).is_discrete());
    }

    #[test]
    fn test_date_open_normalizes_to_closed() {
        let open = Interval::open(date(2023, 12, 30), date(2024, 1, 1));
        let closed = Interval::closed(date(2023, 12, 31), date(2023, 12, 31));
        assert_eq!(open, closed);
    }

    #[test]
    fn test_adjacent_days_have_empty_open_gap() {
        let interval = Interval::open(date(2023, 12, 31), date(2024, 1, 1));
        assert!(interval.is_empty());
    }

    #[test]
    fn test_date_contains() {
        let interval = Interval::closed(date(2024, 1, 1), date(2024, 1, 31));
        assert!(interval.contains(&date(2024, 1, 15)));
        assert!(!interval.contains(&date(2024, 2, 1)));
    }
}
