use crate::math::{Point, Real};

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally.
///
/// # Panics
///
/// Panics if the input slice is empty.
///
/// # Example
///
/// ```
/// use tritri3d::math::Point;
/// use tritri3d::utils::center;
///
/// let points = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(3.0, 0.0, 0.0),
///     Point::new(0.0, 3.0, 0.0),
/// ];
///
/// let c = center(&points);
/// assert!((c.x - 1.0).abs() < 1.0e-12);
/// assert!((c.y - 1.0).abs() < 1.0e-12);
/// assert_eq!(c.z, 0.0);
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the center of less than 1 point."
    );

    let denom = 1.0 / pts.len() as Real;

    let mut res = Point::origin();

    for pt in pts {
        res += pt.coords * denom;
    }

    res
}
