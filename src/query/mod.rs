//! Non-persistent geometric queries.
//!
//! The functions exported by the `details` submodule have the form
//! `[operation]_[shape1]_[shape2]()` where `[operation]` is `intersection_test` and
//! `[shape1]`, `[shape2]` are the types of the shapes passed to the function.
//!
//! Functions taking a `pos12` argument expect the second shape to be given in a local frame
//! positioned at `pos12` relative to the local frame of the first shape. The `local`
//! variants assume both shapes share the same frame.

mod intersection_test;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::intersection_test::*;
}
