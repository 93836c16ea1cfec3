//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! # What is the Separating Axis Theorem?
//!
//! The **Separating Axis Theorem (SAT)** states that two convex shapes do **not** intersect if
//! and only if there exists an axis onto which the projections of the two shapes do not
//! overlap.
//!
//! # How Does SAT Work?
//!
//! 1. **Select candidate axes**: for polyhedra, these are the face normals and the cross
//!    products of one edge of each shape.
//! 2. **Project both shapes onto each axis**: every shape becomes an interval of the real
//!    line.
//! 3. **Check for overlap**: if the intervals are disjoint on any axis, the shapes don't
//!    collide. If all axes show overlap, the shapes are intersecting.
//!
//! # Triangle-Triangle
//!
//! Two triangles need at most 17 axes: the two face normals, the 3 × 3 edge-edge cross
//! products and, for coplanar triangles, the six in-plane normals of their edges. See
//! [`TriangleTriangleSeparatingAxis`] for the exact list.
//!
//! ```rust
//! use tritri3d::math::Point;
//! use tritri3d::query::sat::*;
//! use tritri3d::shape::Triangle;
//!
//! // Two triangles lying on the parallel planes x = 0 and x = 1.
//! let t1 = Triangle::new(
//!     Point::new(0.0, 1.0, 0.0),
//!     Point::new(0.0, 0.0, 1.0),
//!     Point::new(0.0, 1.0, 1.0),
//! );
//! let t2 = Triangle::new(
//!     Point::new(1.0, 2.0, 1.0),
//!     Point::new(1.0, 1.0, 2.0),
//!     Point::new(1.0, 2.0, 2.0),
//! );
//!
//! let axis = triangle_triangle_find_separating_axis(&t1, &t2);
//! assert_eq!(axis, Some(TriangleTriangleSeparatingAxis::FaceNormal1));
//! ```

pub use self::sat_triangle_triangle::*;

mod sat_triangle_triangle;
