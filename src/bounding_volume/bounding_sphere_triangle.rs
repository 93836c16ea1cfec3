use crate::bounding_volume;
use crate::bounding_volume::BoundingSphere;
use crate::shape::Triangle;

impl Triangle {
    /// Computes the local-space bounding sphere of this triangle.
    #[inline]
    pub fn local_bounding_sphere(&self) -> BoundingSphere {
        let (center, radius) =
            bounding_volume::details::point_cloud_bounding_sphere(&self.vertices());

        BoundingSphere::new(center, radius)
    }
}
