use crate::math::Real;
use crate::utils::{max3, min3};

/// A closed interval `[self.0, self.1]` of the real line.
///
/// Separating-axis tests reduce both shapes to one such interval per candidate axis: the
/// shapes are separated along that axis if, and only if, their intervals do not overlap.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T>(pub T, pub T);

impl<T: PartialOrd> Interval<T> {
    /// Do these two intervals share at least one value?
    #[must_use]
    pub fn overlaps(&self, rhs: &Self) -> bool {
        !(self.0 > rhs.1 || self.1 < rhs.0)
    }
}

impl Interval<Real> {
    /// The smallest interval containing the three projections `p`.
    #[must_use]
    pub fn from_projections(p: [Real; 3]) -> Self {
        Interval(min3(p[0], p[1], p[2]), max3(p[0], p[1], p[2]))
    }
}

/// Are the intervals spanned by two triples of projected values disjoint?
///
/// Returns `true` iff `[min(p), max(p)]` and `[min(q), max(q)]` do not overlap. The
/// comparisons are strict: intervals touching at a single endpoint are *not* separated.
/// If any of the six values is NaN, the intervals are reported as not separated.
///
/// # Example
///
/// ```
/// use tritri3d::utils::are_projections_separated;
///
/// assert!(are_projections_separated([0.0, 1.0, 0.5], [1.5, 3.0, 2.0]));
/// // Touching intervals are not separated.
/// assert!(!are_projections_separated([0.0, 1.0, 0.5], [1.0, 3.0, 2.0]));
/// ```
#[inline]
pub fn are_projections_separated(p: [Real; 3], q: [Real; 3]) -> bool {
    if p.iter().chain(q.iter()).any(|x| x.is_nan()) {
        return false;
    }

    !Interval::from_projections(p).overlaps(&Interval::from_projections(q))
}
