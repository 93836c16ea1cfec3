//! Definition of the triangle shape.

use crate::math::{Isometry, Point, Real, Vector};

/// Error returned when building a triangle from a flat list of coordinates.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriangleCoordsError {
    /// A triangle needs exactly nine coordinates: `x, y, z` for each of its three vertices.
    #[error("a triangle needs exactly 9 coordinates, found {0}.")]
    WrongCoordinateCount(usize),
}

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Triangle::new(arr[0], arr[1], arr[2])
    }
}

impl TryFrom<&[Real]> for Triangle {
    type Error = TriangleCoordsError;

    /// Reads a triangle from the flat layout `[x0, y0, z0, x1, y1, z1, x2, y2, z2]`.
    fn try_from(coords: &[Real]) -> Result<Self, Self::Error> {
        let coords: &[Real; 9] = coords
            .try_into()
            .map_err(|_| TriangleCoordsError::WrongCoordinateCount(coords.len()))?;
        Ok(Triangle::from_coords(coords))
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// Creates a triangle from the flat layout `[x0, y0, z0, x1, y1, z1, x2, y2, z2]`.
    #[inline]
    pub fn from_coords(coords: &[Real; 9]) -> Triangle {
        Triangle::new(
            Point::new(coords[0], coords[1], coords[2]),
            Point::new(coords[3], coords[4], coords[5]),
            Point::new(coords[6], coords[7], coords[8]),
        )
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// A vector normal of this triangle.
    ///
    /// The vector points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product). Its norm is twice the area of the triangle.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// Returns a new triangle with vertices transformed by `m`.
    #[inline]
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        Triangle::new(m * self.a, m * self.b, m * self.c)
    }

    /// Returns a new triangle with all its vertices shifted by `shift`.
    #[inline]
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        Triangle::new(self.a + *shift, self.b + *shift, self.c + *shift)
    }

    /// Tests if this triangle is affinely dependent, i.e., its points are almost aligned.
    ///
    /// Such a triangle has a (nearly) zero normal, which carries no separating information.
    pub fn is_affinely_dependent(&self) -> bool {
        const EPS: Real = crate::math::DEFAULT_EPSILON * 100.0;

        relative_eq!(self.scaled_normal().norm_squared(), 0.0, epsilon = EPS * EPS)
    }
}
