//! [`IntervalSet`]: a canonical, pairwise-disjoint union of [`Interval`]s.

use core::cmp::Ordering;
use core::ops::{BitAnd, BitOr, Not, Sub};

use crate::bound::ord::OrdBounded;
use crate::numeric::Element;
use crate::sets::Interval;

/// A canonical ordered sequence of pairwise-disjoint, non-fusable,
/// non-empty intervals over one domain.
///
/// Construction always normalizes: intervals that overlap or touch are
/// fused, empties are dropped, and the result is sorted strictly
/// ascending by [`Interval::lower_cmp`]. Every set operation below
/// consumes already-normalized sets and produces one, so the canonical
/// form invariant never needs to be re-checked once established.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntervalSet<T> {
    intervals: Vec<Interval<T>>,
}

impl<T> IntervalSet<T> {
    /// The empty set: no intervals at all.
    pub fn empty() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// `true` if this set has no intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The canonical sequence of intervals, in ascending order.
    pub fn intervals(&self) -> &[Interval<T>] {
        &self.intervals
    }

    /// An iterator over the canonical sequence, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Interval<T>> {
        self.intervals.iter()
    }

    /// Creates a set from an already-normalized, already-sorted sequence
    /// without re-checking canonical form.
    ///
    /// # Safety
    ///
    /// The caller must ensure `intervals` contains no empties, is sorted
    /// strictly ascending by `lower_cmp`, and that no two consecutive
    /// elements have `overlap_cmp == 0`.
    pub unsafe fn new_unchecked(intervals: Vec<Interval<T>>) -> Self {
        Self { intervals }
    }

    /// Consumes the set, returning its canonical backing sequence.
    pub fn into_raw(self) -> Vec<Interval<T>> {
        self.intervals
    }
}

impl<T> crate::bound::ord::OrdBounded<T> for IntervalSet<T> {
    /// The ordinal of the convex hull: the first interval's lower bound
    /// paired with the last interval's upper bound.
    fn ord_bound_pair(&self) -> crate::bound::ord::OrdBoundPair<&T> {
        use crate::bound::ord::OrdBoundPair;
        match (self.intervals.first(), self.intervals.last()) {
            (Some(first), Some(last)) => {
                let (lower, _) = OrdBounded::ord_bound_pair(first).into_raw();
                let (_, upper) = OrdBounded::ord_bound_pair(last).into_raw();
                OrdBoundPair::new(lower, upper)
            }
            _ => OrdBoundPair::empty(),
        }
    }
}

impl<T: Element> IntervalSet<T> {
    /// Builds a set from a bag of intervals, normalizing per the
    /// construction algorithm: drop empties, sort by lower bound, then
    /// sweep left to right fusing anything whose `overlap_cmp` is `0`.
    pub fn new<I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = Interval<T>>,
    {
        let mut intervals: Vec<_> = intervals.into_iter().filter(|iv| !iv.is_empty()).collect();

        intervals.sort_by(|a, b| {
            a.partial_cmp(b)
                .expect("interval bounds must be comparable to build an IntervalSet")
        });

        let mut normalized: Vec<Interval<T>> = Vec::with_capacity(intervals.len());
        let mut iter = intervals.into_iter();
        if let Some(mut acc) = iter.next() {
            for next in iter {
                if acc.overlap_cmp(&next) == 0 {
                    acc = acc
                        .fusion(&next)
                        .expect("overlap_cmp == 0 guarantees fusion succeeds");
                } else {
                    normalized.push(acc);
                    acc = next;
                }
            }
            normalized.push(acc);
        }

        Self {
            intervals: normalized,
        }
    }

    /// The union `A | B`: every point in `A` or `B`.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            self.intervals
                .iter()
                .cloned()
                .chain(other.intervals.iter().cloned()),
        )
    }

    /// The intersection `A & B`: every point in both `A` and `B`.
    ///
    /// A two-pointer sweep over both already-sorted sequences: advance
    /// whichever side's current interval ends first, emitting the
    /// pointwise intersection whenever the two current intervals overlap.
    pub fn intersection(&self, other: &Self) -> Self {
        let a = &self.intervals;
        let b = &other.intervals;
        let mut result = Vec::new();
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            let (ai, bj) = (&a[i], &b[j]);
            if ai.overlap_cmp(bj) == 0 {
                let overlap = ai.pairwise_intersection(bj);
                if !overlap.is_empty() {
                    result.push(overlap);
                }
            }

            if ai.upper_cmp(bj) <= 0 {
                i += 1;
            } else {
                j += 1;
            }
        }

        // Both inputs are canonical and internally disjoint, so a
        // two-pointer sweep over sorted sequences emits pointwise
        // intersections already in ascending, pairwise-disjoint order.
        Self { intervals: result }
    }

    /// The complement `~A`: every point not in `A`.
    ///
    /// Walks the canonical sequence and emits the gap before the first
    /// interval, between each consecutive pair, and after the last one,
    /// with inverted closedness on every side that borders a real
    /// interval. `~{} = {(-inf, +inf)}`.
    pub fn complement(&self) -> Self {
        if self.intervals.is_empty() {
            return Self {
                intervals: vec![Interval::unbounded()],
            };
        }

        let mut gaps = Vec::with_capacity(self.intervals.len() + 1);

        let first = self.intervals.first().unwrap();
        gaps.push(complement_prefix(first));

        for pair in self.intervals.windows(2) {
            gaps.push(complement_gap(&pair[0], &pair[1]));
        }

        let last = self.intervals.last().unwrap();
        gaps.push(complement_suffix(last));

        Self::new(gaps)
    }

    /// The difference `A - B`: every point in `A` but not `B`.
    ///
    /// Defined as `A & ~B`.
    pub fn difference(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        self.intersection(&other.complement())
    }

    /// `x ∈ S`: binary search on lower bounds, then membership in the
    /// candidate interval.
    pub fn contains(&self, value: &T) -> bool {
        let idx = self
            .intervals
            .partition_point(|probe| lower_at_or_before(probe, value));
        match idx {
            0 => false,
            idx => self.intervals[idx - 1].contains(value),
        }
    }
}

/// `true` if `interval`'s lower bound is at or before `value`, i.e. it
/// could possibly contain it. Unbounded-below always qualifies.
fn lower_at_or_before<T: Element>(interval: &Interval<T>, value: &T) -> bool {
    match interval.lower_value() {
        None => true,
        Some(lower) => lower.partial_cmp(value).expect("comparable domain") != Ordering::Greater,
    }
}

fn complement_prefix<T: Element>(first: &Interval<T>) -> Interval<T> {
    use crate::factory::HalfBoundedFactory;
    match first.lower_value() {
        None => Interval::empty(),
        Some(lower) => {
            if first.lower_closed() {
                Interval::unbound_open(lower.clone())
            } else {
                Interval::unbound_closed(lower.clone())
            }
        }
    }
}

fn complement_suffix<T: Element>(last: &Interval<T>) -> Interval<T> {
    use crate::factory::HalfBoundedFactory;
    match last.upper_value() {
        None => Interval::empty(),
        Some(upper) => {
            if last.upper_closed() {
                Interval::open_unbound(upper.clone())
            } else {
                Interval::closed_unbound(upper.clone())
            }
        }
    }
}

fn complement_gap<T: Element>(left: &Interval<T>, right: &Interval<T>) -> Interval<T> {
    use crate::factory::FiniteFactory;
    let lower = left
        .upper_value()
        .expect("interior gap bound is always finite")
        .clone();
    let upper = right
        .lower_value()
        .expect("interior gap bound is always finite")
        .clone();

    match (left.upper_closed(), right.lower_closed()) {
        (true, true) => Interval::open(lower, upper),
        (true, false) => Interval::open_closed(lower, upper),
        (false, true) => Interval::closed_open(lower, upper),
        (false, false) => Interval::closed(lower, upper),
    }
}

impl<T: Element> Default for IntervalSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Element> From<Interval<T>> for IntervalSet<T> {
    fn from(interval: Interval<T>) -> Self {
        Self::new([interval])
    }
}

impl<T: Element> FromIterator<Interval<T>> for IntervalSet<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: Element> BitOr for &IntervalSet<T> {
    type Output = IntervalSet<T>;
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T: Element> BitAnd for &IntervalSet<T> {
    type Output = IntervalSet<T>;
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T: Element> Sub for &IntervalSet<T> {
    type Output = IntervalSet<T>;
    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl<T: Element> Not for &IntervalSet<T> {
    type Output = IntervalSet<T>;
    fn not(self) -> Self::Output {
        self.complement()
    }
}
