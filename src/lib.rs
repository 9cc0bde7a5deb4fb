//! # intervalsets
//!
//! Typed, bounded and unbounded intervals and interval sets, generic over
//! any totally ordered [`Domain`](numeric::Domain), with exact
//! union/intersection/complement/difference set algebra and a single
//! canonical normalized representation.
//!
//! ```
//! use intervalsets::prelude::*;
//!
//! let x = Interval::closed(0, 10);
//! assert!(!x.is_empty());
//! assert!(x.contains(&5));
//!
//! let y = Interval::closed_unbound(5);
//! let set = IntervalSet::new([x, y]);
//! assert_eq!(set.intervals(), &[Interval::closed_unbound(0)]);
//!
//! assert_eq!(format!("{}", set), "{[0, ->)}");
//! ```
//!
//! # Discrete vs. continuous domains
//!
//! An interval's bounds normalize at construction time according to
//! whether its element type is discrete (integers) or continuous
//! (floats): `(1, 4)` over `i32` is built as `[2, 3]`, the same
//! representation you'd get from typing `[2, 3]` directly.
//!
//! ```
//! use intervalsets::prelude::*;
//!
//! assert_eq!(Interval::open(1, 4), Interval::closed(2, 3));
//! assert!(Interval::open(1, 2).is_empty());
//! assert!(!Interval::open(1.0, 1.1).is_empty());
//! ```
//!
//! # Optional features
//!
//! * `chrono` -- implements [`numeric::Domain`] for `chrono::NaiveDate` as
//!   a discrete, day-granular domain.

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod bound;
pub mod error;
pub mod factory;
pub mod numeric;

mod display;
mod set;
mod sets;

#[cfg(feature = "chrono")]
pub mod feat;

pub use error::{Error, InvariantViolationError, Result, TypeMismatchError};
pub use set::IntervalSet;
pub use sets::{Interval, RichCmpOp};

/// Common traits and types, re-exported for a single glob import.
pub mod prelude {
    pub use crate::bound::ord::OrdBounded;
    pub use crate::bound::{BoundType, Side};
    pub use crate::factory::{EmptyFactory, FiniteFactory, HalfBoundedFactory, UnboundedFactory};
    pub use crate::numeric::{Domain, Element};
    pub use crate::{Interval, IntervalSet, RichCmpOp};
}
