//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::interval::{are_projections_separated, Interval};
pub use self::sort::{max3, min3};

mod center;
mod interval;
mod sort;
