use crate::math::Real;

/// The smallest of three values.
///
/// Ties are resolved arbitrarily.
#[inline]
pub fn min3(a: Real, b: Real, c: Real) -> Real {
    if a < b {
        if a < c {
            a
        } else {
            c
        }
    } else if b < c {
        b
    } else {
        c
    }
}

/// The largest of three values.
///
/// Ties are resolved arbitrarily.
#[inline]
pub fn max3(a: Real, b: Real, c: Real) -> Real {
    if a > b {
        if a > c {
            a
        } else {
            c
        }
    } else if b > c {
        b
    } else {
        c
    }
}
