//! Fallible arithmetic helpers.

use std::ops::Mul;

use crate::Float;

/// Divides `lhs` by `rhs` if the reciprocal of `rhs` is finite; otherwise
/// returns `None`.
pub fn try_div<T>(lhs: T, rhs: Float) -> Option<T::Output>
where
    T: Mul<Float>,
{
    let recip_rhs = rhs.recip();
    recip_rhs.is_finite().then(|| lhs * recip_rhs)
}

/// Returns the reciprocal of `x` if it is finite; otherwise returns `None`.
pub fn try_recip(x: Float) -> Option<Float> {
    let ret = x.recip();
    ret.is_finite().then_some(ret)
}

/// Returns the square root of `n` if the result is finite; otherwise returns
/// `None`.
pub fn try_sqrt(n: Float) -> Option<Float> {
    let ret = n.sqrt();
    ret.is_finite().then_some(ret)
}
