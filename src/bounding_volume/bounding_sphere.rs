//! Bounding sphere.

use crate::math::{Point, Real};

/// A Bounding Sphere.
///
/// Two triangles whose bounding spheres do not intersect cannot intersect either.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    /// The radius of the sphere.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// Checks if this bounding sphere intersects another one.
    ///
    /// Touching spheres intersect.
    #[inline]
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance_squared = delta_pos.norm_squared();
        let sum_radius = self.radius + other.radius;

        distance_squared <= sum_radius * sum_radius
    }

    /// Returns a copy of this bounding sphere with its radius enlarged by `amount`.
    #[inline]
    pub fn loosened(&self, amount: Real) -> BoundingSphere {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        BoundingSphere::new(self.center, self.radius + amount)
    }
}
