//! Bounds partition elements inside and outside of an [`Interval`](crate::Interval).
//!
//! A finite bound needs two pieces of information: the limiting value, and
//! the [`BoundType`] (whether the limit itself belongs to the interval).
//! Which [`Side`] of the interval a bound constrains is tracked separately
//! by whichever set type is holding it.

use core::cmp::Ordering::{self, Equal, Greater, Less};

use crate::numeric::Domain;

/// Side (`Left` | `Right`) of an interval on the number line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    /// The lower bound.
    Left,
    /// The upper bound.
    Right,
}

impl Side {
    /// Flip `Left` <-> `Right`.
    #[inline(always)]
    pub const fn flip(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Return `left` or `right` depending on the value of `self`.
    #[inline(always)]
    pub fn select<T>(self, left: T, right: T) -> T {
        match self {
            Self::Left => left,
            Self::Right => right,
        }
    }
}

/// Whether a finite bound's limit belongs to the set it constrains.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BoundType {
    /// Excludes the limit element from the set.
    Open,
    /// Includes the limit element in the set.
    Closed,
}

impl BoundType {
    /// Flip `Open` <-> `Closed`.
    #[inline(always)]
    pub fn flip(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// A finite limit on one side of an interval.
///
/// `Open(limit)` does not include `limit` as an element of the interval,
/// while `Closed(limit)` does.
///
/// No ordering is implemented directly on `FiniteBound` because the correct
/// order is a function of the bound *and* which side it constrains; see
/// [`FiniteBound::finite_ord`] / the [`ord`] module.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FiniteBound<T>(BoundType, T);

impl<T> FiniteBound<T> {
    /// Creates a new [`FiniteBound`].
    pub const fn new(bound_type: BoundType, limit: T) -> Self {
        Self(bound_type, limit)
    }

    /// Creates a new closed bound at `limit`.
    pub const fn closed(limit: T) -> Self {
        Self(BoundType::Closed, limit)
    }

    /// Creates a new open bound at `limit`.
    pub const fn open(limit: T) -> Self {
        Self(BoundType::Open, limit)
    }

    /// Unpacks into `(BoundType, T)`.
    pub fn into_raw(self) -> (BoundType, T) {
        (self.0, self.1)
    }

    /// Returns the bound type.
    #[inline(always)]
    pub fn bound_type(&self) -> BoundType {
        self.0
    }

    /// Returns `true` if this bound is open.
    #[inline(always)]
    pub fn is_open(&self) -> bool {
        matches!(self.0, BoundType::Open)
    }

    /// Returns `true` if this bound is closed.
    #[inline(always)]
    pub fn is_closed(&self) -> bool {
        matches!(self.0, BoundType::Closed)
    }

    /// Returns a reference to this bound's limit value.
    #[inline(always)]
    pub fn value(&self) -> &T {
        &self.1
    }

    /// Returns a new bound with the same [`BoundType`] but a mapped limit.
    pub fn map<U>(self, func: impl FnOnce(T) -> U) -> FiniteBound<U> {
        FiniteBound::<U>(self.0, func(self.1))
    }

    /// Returns a new bound with the same limit but flipped [`BoundType`].
    #[inline(always)]
    pub fn flip(self) -> Self {
        Self(self.0.flip(), self.1)
    }

    /// Creates an [`ord::OrdBound`] view of this bound on the given side.
    pub fn ord(&self, side: Side) -> ord::OrdBound<&T> {
        ord::OrdBound::Finite(self.finite_ord(side))
    }

    /// Creates an [`ord::FiniteOrdBound`] view of this bound on the given side.
    pub fn finite_ord(&self, side: Side) -> ord::FiniteOrdBound<&T> {
        match self.0 {
            BoundType::Closed => ord::FiniteOrdBound::closed(self.value()),
            BoundType::Open => ord::FiniteOrdBound::open(side, self.value()),
        }
    }

    /// Consumes self into an [`ord::OrdBound`] on the given side.
    pub fn into_ord(self, side: Side) -> ord::OrdBound<T> {
        let (bound_type, value) = self.into_raw();
        let kind = match bound_type {
            BoundType::Closed => ord::FiniteOrdBoundKind::Closed,
            BoundType::Open => ord::FiniteOrdBoundKind::open(side),
        };
        ord::OrdBound::Finite(ord::FiniteOrdBound::new(value, kind))
    }
}

impl<T: PartialOrd> FiniteBound<T> {
    /// Tests whether `value` is on the "inside" of this bound on `side`.
    pub fn contains(&self, side: Side, value: &T) -> bool {
        match side {
            Side::Left => match self.0 {
                BoundType::Open => self.value() < value,
                BoundType::Closed => self.value() <= value,
            },
            Side::Right => match self.0 {
                BoundType::Open => value < self.value(),
                BoundType::Closed => value <= self.value(),
            },
        }
    }
}

impl<T: Domain> FiniteBound<T> {
    /// For discrete domains, collapses an open bound to the equivalent
    /// closed bound at the adjacent value. A no-op for continuous domains
    /// and for bounds that are already closed.
    ///
    /// This is what makes e.g. `(1, 4)` on integers compare and fuse
    /// identically to `[2, 3]`: normalization happens once, at
    /// construction, rather than being special-cased by every consumer.
    pub fn normalized(self, side: Side) -> Self {
        match self.0 {
            BoundType::Open => match self.value().try_adjacent(side.flip()) {
                None => self,
                Some(new_limit) => Self::closed(new_limit),
            },
            BoundType::Closed => self,
        }
    }
}

/// Helpers that define a total order over interval bounds, including the
/// unbounded sentinels.
pub mod ord {
    use super::{BoundType, FiniteBound};

    /// A totally ordered view of an (possibly unbounded) interval bound.
    ///
    /// ```text
    /// LeftUnbounded < RightOpen(x) < Closed(x) < LeftOpen(x) < RightUnbounded
    /// ```
    #[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
    pub enum OrdBound<T> {
        /// Represents an unbounded lower endpoint (`-infinity`).
        LeftUnbounded,
        /// A finite bound, ordered by [`FiniteOrdBound`].
        Finite(FiniteOrdBound<T>),
        /// Represents an unbounded upper endpoint (`+infinity`).
        RightUnbounded,
    }

    impl<T> OrdBound<T> {
        /// Creates a closed finite `OrdBound`.
        pub const fn closed(limit: T) -> Self {
            Self::Finite(FiniteOrdBound::closed(limit))
        }
    }

    /// Ordered exclusivity cases for finite bounds.
    ///
    /// For a fixed value `x`: `RightOpen(x) < Closed(x) < LeftOpen(x)`. This
    /// strict ordering is what lets `overlap_cmp` tell `[0, x)` followed by
    /// `(x, 10]` (a genuine gap at `x`) apart from `[0, x]` followed by
    /// `[x, 10]` (sharing the point `x`): only `Closed` compares equal to
    /// `Closed` at the same value, so a shared endpoint registers as
    /// overlap only when both sides actually include it.
    #[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
    pub enum FiniteOrdBoundKind {
        /// An open right (upper) bound.
        RightOpen,
        /// A closed bound, either side.
        Closed,
        /// An open left (lower) bound.
        LeftOpen,
    }

    impl FiniteOrdBoundKind {
        /// Returns the correctly-sided open-bound kind.
        pub fn open(side: super::Side) -> Self {
            side.select(Self::LeftOpen, Self::RightOpen)
        }
    }

    /// A finite bound paired with its ordering kind, giving it a total order.
    #[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
    pub struct FiniteOrdBound<T>(pub T, pub FiniteOrdBoundKind);

    impl<T> FiniteOrdBound<T> {
        /// Creates a new `FiniteOrdBound`.
        pub const fn new(limit: T, kind: FiniteOrdBoundKind) -> Self {
            Self(limit, kind)
        }

        /// Creates a closed `FiniteOrdBound`.
        pub const fn closed(limit: T) -> Self {
            Self::new(limit, FiniteOrdBoundKind::Closed)
        }

        /// Creates an open `FiniteOrdBound` on the given side.
        pub const fn open(side: super::Side, limit: T) -> Self {
            Self::new(limit, FiniteOrdBoundKind::open(side))
        }

        /// Recovers the [`BoundType`] this ordinal was built from: `Closed`
        /// stays closed, either open variant (`LeftOpen`/`RightOpen`)
        /// collapses back to plain `Open`.
        pub fn bound_type(&self) -> BoundType {
            match self.1 {
                FiniteOrdBoundKind::Closed => BoundType::Closed,
                FiniteOrdBoundKind::LeftOpen | FiniteOrdBoundKind::RightOpen => BoundType::Open,
            }
        }

        /// Converts back into a plain [`FiniteBound`], discarding which side
        /// produced the exclusivity kind.
        pub fn into_bound(self) -> FiniteBound<T> {
            let bound_type = self.bound_type();
            FiniteBound::new(bound_type, self.0)
        }
    }

    impl<T: Clone> FiniteOrdBound<&T> {
        /// Clones the referenced limit into an owned ordinal.
        pub fn cloned(self) -> FiniteOrdBound<T> {
            FiniteOrdBound::new(self.0.clone(), self.1)
        }
    }

    impl<T: Clone> OrdBound<&T> {
        /// Clones the referenced limit (if any) into an owned ordinal.
        pub fn cloned(self) -> OrdBound<T> {
            match self {
                OrdBound::LeftUnbounded => OrdBound::LeftUnbounded,
                OrdBound::RightUnbounded => OrdBound::RightUnbounded,
                OrdBound::Finite(bound) => OrdBound::Finite(bound.cloned()),
            }
        }
    }

    /// An ordered pair `(lower, upper)` used to give any interval a total
    /// order; the empty set is represented as `(LeftUnbounded, LeftUnbounded)`,
    /// the lowest possible value, so empty intervals sort before everything.
    #[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
    pub struct OrdBoundPair<T>(OrdBound<T>, OrdBound<T>);

    impl<T> OrdBoundPair<T> {
        /// Creates the canonical empty-set ordinal.
        pub const fn empty() -> Self {
            Self(OrdBound::LeftUnbounded, OrdBound::LeftUnbounded)
        }

        /// Creates a new ordered bound pair.
        pub fn new(left: OrdBound<T>, right: OrdBound<T>) -> Self {
            match (left, right) {
                (OrdBound::LeftUnbounded, OrdBound::LeftUnbounded) => Self::empty(),
                (left, right) => Self(left, right),
            }
        }

        /// Decomposes into the `(lower, upper)` pair.
        pub fn into_raw(self) -> (OrdBound<T>, OrdBound<T>) {
            (self.0, self.1)
        }
    }

    impl<T: PartialEq> OrdBoundPair<T> {
        /// `true` if this ordinal is the canonical empty-set representation.
        pub fn is_empty(&self) -> bool {
            self.0 == OrdBound::LeftUnbounded && self.1 == OrdBound::LeftUnbounded
        }
    }

    /// Any type with an ordered `(lower, upper)` bound pair view.
    pub trait OrdBounded<T> {
        /// Creates an ordered bound pair view of a set's bounds.
        fn ord_bound_pair(&self) -> OrdBoundPair<&T>;
    }
}

/// Returns the sign of comparing two *lower* bounds per §4.1: unbounded is
/// less than any finite lower bound; among equal finite values, closed
/// sorts before open (closed admits more points).
pub fn cmp_lower_bounds<T: PartialOrd>(
    a: Option<&FiniteBound<T>>,
    b: Option<&FiniteBound<T>>,
) -> Option<Ordering> {
    match (a, b) {
        (None, None) => Some(Equal),
        (None, Some(_)) => Some(Less),
        (Some(_), None) => Some(Greater),
        (Some(a), Some(b)) => a.finite_ord(Side::Left).partial_cmp(&b.finite_ord(Side::Left)),
    }
}

/// Returns the sign of comparing two *upper* bounds per §4.1: unbounded is
/// greater than any finite upper bound; among equal finite values, closed
/// sorts after open (closed admits more points).
pub fn cmp_upper_bounds<T: PartialOrd>(
    a: Option<&FiniteBound<T>>,
    b: Option<&FiniteBound<T>>,
) -> Option<Ordering> {
    match (a, b) {
        (None, None) => Some(Equal),
        (None, Some(_)) => Some(Greater),
        (Some(_), None) => Some(Less),
        (Some(a), Some(b)) => a
            .finite_ord(Side::Right)
            .partial_cmp(&b.finite_ord(Side::Right)),
    }
}
