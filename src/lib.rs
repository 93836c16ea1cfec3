/*!
tritri3d
========

**tritri3d** decides whether two triangles of the 3-dimensional space intersect.

The test is an application of the separating axis theorem specialized to pairs of
triangles, following David Eberly, *"Dynamic Collision Detection using Oriented
Bounding Boxes"* (2001). Up to 17 candidate axes are evaluated: the two face normals,
the nine edge-edge cross products, and six in-plane edge normals that resolve the
coplanar case.

```
use tritri3d::math::Point;
use tritri3d::query::details::intersection_test_local_triangle_triangle;
use tritri3d::shape::Triangle;

let t1 = Triangle::new(
    Point::new(0.0, 0.0, 0.0),
    Point::new(5.0, 0.0, 0.0),
    Point::new(0.0, 5.0, 0.0),
);
let t2 = Triangle::new(
    Point::new(1.0, 1.0, 0.0),
    Point::new(4.0, 1.0, 0.0),
    Point::new(1.0, 4.0, 0.0),
);

assert!(intersection_test_local_triangle_triangle(&t1, &t2));
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unused_qualifications)]

#[cfg(not(feature = "std"))]
extern crate core as std;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod shape;
pub mod utils;

/// Aliases for the mathematical types used throughout this crate.
///
/// Vector algebra (`+`, `-`, [`cross`](na::Vector3::cross), [`dot`](na::Vector3::dot),
/// [`norm`](na::Vector3::norm)) is provided by `nalgebra`. All of these return new values
/// and are total over real inputs: the cross product of two parallel vectors is the zero
/// vector, and the norm of the zero vector is zero.
pub mod math {
    pub use na::{Isometry3, Point3, Vector3};

    /// The scalar type used throughout this crate.
    pub type Real = f64;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;
}
