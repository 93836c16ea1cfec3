//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::BoundingSphere;

#[doc(hidden)]
pub mod bounding_sphere;
mod bounding_sphere_triangle;
mod bounding_sphere_utils;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    pub use super::bounding_sphere_utils::{
        point_cloud_bounding_sphere, point_cloud_bounding_sphere_with_center,
    };
}
