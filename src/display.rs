//! Bracket-notation [`fmt::Display`] for [`Interval`] and [`IntervalSet`].

use core::fmt::{self, Write};

use itertools::Itertools;

use crate::bound::{BoundType, FiniteBound, Side};
use crate::set::IntervalSet;
use crate::sets::{FiniteInterval, HalfInterval, Interval};

fn write_bound_type(f: &mut fmt::Formatter<'_>, side: Side, bound_type: Option<BoundType>) -> fmt::Result {
    let delim = match bound_type.unwrap_or(BoundType::Open) {
        BoundType::Closed => side.select('[', ']'),
        BoundType::Open => side.select('(', ')'),
    };
    f.write_char(delim)
}

fn write_bound<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    side: Side,
    bound: Option<&FiniteBound<T>>,
) -> fmt::Result {
    match side {
        Side::Left => {
            write_bound_type(f, side, bound.map(|b| b.bound_type()))?;
            match bound {
                None => f.write_str("<-")?,
                Some(inner) => write!(f, "{}", inner.value())?,
            }
        }
        Side::Right => {
            match bound {
                None => f.write_str("->")?,
                Some(inner) => write!(f, "{}", inner.value())?,
            }
            write_bound_type(f, side, bound.map(|b| b.bound_type()))?;
        }
    }
    Ok(())
}

impl<T: fmt::Display> fmt::Display for FiniteInterval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.view() {
            None => f.write_str("{}"),
            Some((lower, upper)) => {
                write_bound(f, Side::Left, Some(lower))?;
                f.write_str(", ")?;
                write_bound(f, Side::Right, Some(upper))
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for HalfInterval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.side() {
            Side::Left => {
                write_bound(f, Side::Left, Some(self.bound()))?;
                f.write_str(", ")?;
                write_bound::<T>(f, Side::Right, None)
            }
            Side::Right => {
                write_bound::<T>(f, Side::Left, None)?;
                f.write_str(", ")?;
                write_bound(f, Side::Right, Some(self.bound()))
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => f.write_str("(<-, ->)"),
            Self::Finite(inner) => inner.fmt(f),
            Self::Half(inner) => inner.fmt(f),
        }
    }
}

impl<T: fmt::Display> fmt::Display for IntervalSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            Interval::<T>::empty().fmt(f)
        } else {
            write!(f, "{{{}}}", self.iter().join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{EmptyFactory, FiniteFactory, HalfBoundedFactory, UnboundedFactory};
    use crate::set::IntervalSet;

    #[test]
    fn test_display_finite() {
        assert_eq!(format!("{}", Interval::<i8>::empty()), "{}");
        assert_eq!(format!("{}", Interval::closed(0, 5)), "[0, 5]");
        assert_eq!(format!("{}", Interval::open(0.1, 5.1)), "(0.1, 5.1)");
        assert_eq!(format!("{}", Interval::open_closed(0.1, 5.1)), "(0.1, 5.1]");
        assert_eq!(format!("{}", Interval::closed_open(0.1, 5.1)), "[0.1, 5.1)");
    }

    #[test]
    fn test_display_half() {
        assert_eq!(format!("{}", Interval::unbound_closed(0.5)), "(<-, 0.5]");
        assert_eq!(format!("{}", Interval::unbound_open(0.5)), "(<-, 0.5)");
        assert_eq!(format!("{}", Interval::closed_unbound(0.5)), "[0.5, ->)");
        assert_eq!(format!("{}", Interval::open_unbound(0.5)), "(0.5, ->)");
    }

    #[test]
    fn test_display_interval() {
        assert_eq!(format!("{}", Interval::<i8>::empty()), "{}");
        assert_eq!(format!("{}", Interval::<i8>::unbounded()), "(<-, ->)");
    }

    #[test]
    fn test_display_set() {
        let set = IntervalSet::new([
            Interval::unbound_closed(-9.9),
            Interval::open(5.5, 9.9),
            Interval::closed_open(11.1, 22.2),
            Interval::open_unbound(33.3),
        ]);
        assert_eq!(
            format!("{}", set),
            "{(<-, -9.9], (5.5, 9.9), [11.1, 22.2), (33.3, ->)}"
        );
        assert_eq!(format!("{}", IntervalSet::<i32>::empty()), "{}");
    }
}
