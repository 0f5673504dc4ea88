use std::fmt;

use bitflags::bitflags;
use itertools::Itertools;

use crate::Float;

bitflags! {
    /// Set of basis vectors for a term in the 3D projective geometric
    /// algebra. The Euclidean subalgebra uses the same bitmask minus `E0`.
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Axes: u8 {
        /// Scalar (no axes)
        const SCALAR = 0;

        /// Null vector e₀
        const E0 = 1 << 0;

        /// Euclidean X axis (e₁)
        const X = 1 << 1;
        /// Euclidean Y axis (e₂)
        const Y = 1 << 2;
        /// Euclidean Z axis (e₃)
        const Z = 1 << 3;

        /// Euclidean pseudoscalar e₁₂₃
        const XYZ = Self::X.bits() | Self::Y.bits() | Self::Z.bits();
        /// Projective pseudoscalar e₀₁₂₃
        const E0XYZ = Self::E0.bits() | Self::XYZ.bits();
    }
}

impl fmt::Display for Axes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in std::iter::successors(Some(self.bits()), |a| Some(a >> 1))
            .take_while(|&a| a != 0)
            .positions(|a| a & 1 != 0)
        {
            write!(f, "{}", Axes::NAMES.get(i).copied().unwrap_or("?"))?;
        }
        Ok(())
    }
}

impl Axes {
    /// Human-friendly name of each axis.
    pub const NAMES: &'static [&'static str] = &["e₀", "x", "y", "z"];

    /// Returns the `i`th Euclidean axis (zero-indexed).
    pub const fn euclidean(i: u8) -> Self {
        Self::from_bits_truncate(1 << (i + 1))
    }

    /// Returns the grade of the basis blade, which is the number of basis
    /// vectors used to construct it.
    pub const fn grade(self) -> u8 {
        self.bits().count_ones() as _
    }

    /// Returns the sign of the [reverse] of the basis blade.
    ///
    /// [reverse]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Reverses
    pub const fn sign_of_reverse(self) -> Float {
        // The number of swaps required to reverse a sequence of length n is
        // n*(n+1)/2. See <https://oeis.org/A000217>. This sequence alternates
        // between pairs of even and odd numbers; if its parity is odd, then
        // negate the coefficient.
        match self.bits().count_ones() % 4 {
            0 | 1 => 1.0,
            2 | 3 => -1.0,
            _ => unreachable!(),
        }
    }

    /// Returns the sign of the [geometric product] between `lhs` and `rhs`,
    /// or `None` if the result is zero (the product of two blades that share
    /// the null vector e₀).
    ///
    /// [geometric product]:
    ///     https://rigidgeometricalgebra.org/wiki/index.php?title=Geometric_products
    pub fn sign_of_geometric_product(lhs: Self, rhs: Self) -> Option<Float> {
        // e₀ squares to 0.
        if lhs.contains(Self::E0) && rhs.contains(Self::E0) {
            return None;
        }

        // Count the number of swaps needed to sort the combined product. If
        // the number of swaps is odd, negate the result.
        let mut neg = false;
        let mut a = lhs.bits();
        let mut b = rhs.bits();
        while a != 0 && b & 0x7F != 0 {
            let i = b.trailing_zeros() + 1;
            a >>= i;
            b >>= i;
            neg ^= a.count_ones() & 1 != 0;
        }

        Some(if neg { -1.0 } else { 1.0 })
    }

    /// Returns the unsigned geometric product of `lhs` and `rhs`.
    pub const fn unsigned_geometric_product(lhs: Self, rhs: Self) -> Axes {
        Self::from_bits_truncate(lhs.bits() ^ rhs.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grades() {
        assert_eq!(Axes::SCALAR.grade(), 0);
        assert_eq!(Axes::E0.grade(), 1);
        assert_eq!((Axes::X | Axes::Y).grade(), 2);
        assert_eq!(Axes::XYZ.grade(), 3);
        assert_eq!(Axes::E0XYZ.grade(), 4);
    }

    #[test]
    fn test_sign_of_reverse() {
        assert_eq!(Axes::SCALAR.sign_of_reverse(), 1.0);
        assert_eq!(Axes::X.sign_of_reverse(), 1.0);
        assert_eq!((Axes::Y | Axes::Z).sign_of_reverse(), -1.0);
        assert_eq!(Axes::XYZ.sign_of_reverse(), -1.0);
        assert_eq!(Axes::E0XYZ.sign_of_reverse(), 1.0);
    }

    #[test]
    fn test_euclidean_vectors_square_to_one() {
        for i in 0..3 {
            let v = Axes::euclidean(i);
            assert_eq!(Axes::sign_of_geometric_product(v, v), Some(1.0));
            assert_eq!(Axes::unsigned_geometric_product(v, v), Axes::SCALAR);
        }
    }

    #[test]
    fn test_null_vector_squares_to_zero() {
        assert_eq!(Axes::sign_of_geometric_product(Axes::E0, Axes::E0), None);
        let e01 = Axes::E0 | Axes::X;
        assert_eq!(Axes::sign_of_geometric_product(e01, e01), None);
    }

    #[test]
    fn test_bivectors_square_to_minus_one() {
        for b in [Axes::X | Axes::Y, Axes::X | Axes::Z, Axes::Y | Axes::Z] {
            assert_eq!(Axes::sign_of_geometric_product(b, b), Some(-1.0));
        }
    }

    #[test]
    fn test_anticommuting_vectors() {
        let xy = Axes::sign_of_geometric_product(Axes::X, Axes::Y);
        let yx = Axes::sign_of_geometric_product(Axes::Y, Axes::X);
        assert_eq!(xy, Some(1.0));
        assert_eq!(yx, Some(-1.0));
    }
}
