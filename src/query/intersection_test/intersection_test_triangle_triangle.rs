use crate::math::{Isometry, Real};
use crate::query::sat;
use crate::shape::Triangle;

/// Tests if two triangles expressed in the same local frame intersect.
///
/// Triangles touching at a single point, along an edge, or overlapping on a common plane
/// are all considered intersecting.
///
/// The result does not depend on the order of the arguments unless one of the triangles is
/// degenerate (zero area). A degenerate `triangle1` has a zero normal and contributes no
/// in-plane axis, so a segment-like `triangle1` coplanar with `triangle2` may be reported as
/// intersecting it even though the swapped call finds them disjoint.
///
/// ```
/// use tritri3d::math::Point;
/// use tritri3d::query::details::intersection_test_local_triangle_triangle;
/// use tritri3d::shape::Triangle;
///
/// let t1 = Triangle::new(
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(2.0, 2.0, 2.0),
///     Point::new(2.0, 0.0, 2.0),
/// );
/// let t2 = Triangle::new(
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(1.0, 1.0, 1.0),
///     Point::new(0.0, 1.0, 1.0),
/// );
///
/// assert!(intersection_test_local_triangle_triangle(&t1, &t2));
/// ```
#[inline]
pub fn intersection_test_local_triangle_triangle(
    triangle1: &Triangle,
    triangle2: &Triangle,
) -> bool {
    sat::triangle_triangle_find_separating_axis(triangle1, triangle2).is_none()
}

/// Tests if two triangles intersect.
///
/// `triangle2` is expressed in a local frame positioned at `pos12` relative to the local
/// frame of `triangle1`.
#[inline]
pub fn intersection_test_triangle_triangle(
    pos12: &Isometry<Real>,
    triangle1: &Triangle,
    triangle2: &Triangle,
) -> bool {
    let triangle2 = triangle2.transformed(pos12);
    intersection_test_local_triangle_triangle(triangle1, &triangle2)
}
