//! Implementation details of the triangle-triangle intersection test.

pub use self::intersection_test_triangle_triangle::{
    intersection_test_local_triangle_triangle, intersection_test_triangle_triangle,
};

mod intersection_test_triangle_triangle;
