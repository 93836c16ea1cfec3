//! Shapes supported by tritri3d.

pub use self::triangle::{Triangle, TriangleCoordsError};

mod triangle;
