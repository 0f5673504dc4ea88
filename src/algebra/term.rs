use std::fmt;
use std::ops::{Mul, MulAssign, Neg};

use super::Axes;
use crate::{approx_cmp::is_approx_nonzero, Float, EPSILON};

/// Term in the geometric algebra, consisting of a real coefficient and a
/// bitmask representing the basis blade.
///
/// This struct isn't stored anywhere; it's mostly just constructed
/// temporarily for iteration over the terms of a multivector.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Term {
    /// Coefficient.
    pub coef: Float,
    /// Bitset of basis vectors.
    pub axes: Axes,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.coef, f)?;
        write!(f, " ")?;
        fmt::Display::fmt(&self.axes, f)?;
        Ok(())
    }
}

impl approx::AbsDiffEq for Term {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.axes == other.axes && self.coef.abs_diff_eq(&other.coef, epsilon)
    }
}

/// Negation of a term.
impl Neg for Term {
    type Output = Term;

    fn neg(mut self) -> Self::Output {
        self.coef = -self.coef;
        self
    }
}

/// Geometric product of two terms. Returns `None` when exactly zero.
impl Mul for Term {
    type Output = Option<Term>;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::geometric_product(self, rhs)
    }
}

/// Scaling a term by a number.
impl Mul<Float> for Term {
    type Output = Term;

    fn mul(mut self, rhs: Float) -> Self::Output {
        self *= rhs;
        self
    }
}
impl MulAssign<Float> for Term {
    fn mul_assign(&mut self, rhs: Float) {
        self.coef *= rhs;
    }
}

impl Term {
    /// Constructs a scalar term.
    pub const fn scalar(x: Float) -> Self {
        Term {
            coef: x,
            axes: Axes::SCALAR,
        }
    }
    /// Constructs a unit term.
    pub const fn unit(axes: Axes) -> Self {
        Term { coef: 1.0, axes }
    }

    /// Returns whether the term is approximately zero.
    pub fn is_zero(self) -> bool {
        !is_approx_nonzero(&self.coef)
    }

    /// Returns the grade of the term, which is the number of basis vectors
    /// used to construct it.
    pub const fn grade(self) -> u8 {
        self.axes.grade()
    }

    /// Returns the reverse term, which has the basis vectors reversed (which
    /// in practice just means the sign might be flipped).
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.coef *= self.axes.sign_of_reverse();
        self
    }

    /// Returns the [geometric product] between `lhs` and `rhs`, or `None` if
    /// the result is zero.
    ///
    /// [geometric product]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Geometric_products
    #[must_use]
    pub fn geometric_product(lhs: Self, rhs: Self) -> Option<Self> {
        let sign = Axes::sign_of_geometric_product(lhs.axes, rhs.axes)?;
        Some(Term {
            coef: lhs.coef * rhs.coef * sign,
            axes: Axes::unsigned_geometric_product(lhs.axes, rhs.axes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_product_associativity() {
        let terms = [
            Term::unit(Axes::E0),
            Term::unit(Axes::X) * 2.0,
            Term::unit(Axes::X | Axes::Y) * -0.5,
            Term::unit(Axes::Y | Axes::Z) * 3.0,
            Term::unit(Axes::XYZ),
            Term::unit(Axes::E0XYZ) * 0.25,
        ];
        for a in terms {
            for b in terms {
                for c in terms {
                    let left = (a * b).and_then(|ab| ab * c);
                    let right = (b * c).and_then(|bc| a * bc);
                    match (left, right) {
                        (Some(l), Some(r)) => assert_approx_eq!(l, r),
                        (l, r) => assert_eq!(l.is_none(), r.is_none()),
                    }
                }
            }
        }
    }

    #[test]
    fn test_reverse_is_involution() {
        for axes in (0..16).map(Axes::from_bits_truncate) {
            let t = Term { coef: 1.5, axes };
            assert_eq!(t.reverse().reverse(), t);
        }
    }
}
