use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{Axes, Term};
use crate::approx_cmp::is_approx_nonzero;
use crate::{util, Float};

/// Algebra signature for a [`Multivector`].
///
/// This is a closed enumeration: the crate only ever works in the 3D
/// Euclidean algebra Cl(3) and the 3D projective algebra Cl(3,0,1), whose
/// extra basis vector e₀ squares to zero.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Signature {
    /// 3D Euclidean geometric algebra (8 basis blades).
    #[default]
    Euclidean,
    /// 3D projective geometric algebra with the null vector e₀ (16 basis
    /// blades). Bivectors with e₀ components represent screw axes; even
    /// multivectors represent motors.
    Projective,
}

impl Signature {
    /// Returns the number of basis blades in the algebra.
    pub const fn blade_count(self) -> usize {
        match self {
            Signature::Euclidean => 8,
            Signature::Projective => 16,
        }
    }

    /// Returns the smallest signature containing both arguments. Mixing
    /// signatures promotes to the projective algebra.
    pub(crate) fn merge(a: Self, b: Self) -> Self {
        std::cmp::max(a, b)
    }

    /// Returns the index of the coefficient for `axes`, or `None` if the
    /// blade is not present in the algebra.
    fn index_of(self, axes: Axes) -> Option<usize> {
        match self {
            Signature::Euclidean => {
                (!axes.contains(Axes::E0)).then(|| axes.bits() as usize >> 1)
            }
            Signature::Projective => Some(axes.bits() as usize),
        }
    }

    /// Returns the `Axes` for the `i`th coefficient.
    fn axes_at_index(self, i: usize) -> Axes {
        match self {
            Signature::Euclidean => Axes::from_bits_truncate((i << 1) as u8),
            Signature::Projective => Axes::from_bits_truncate(i as u8),
        }
    }
}

/// Dense multivector in the 3D Euclidean or projective geometric algebra.
///
/// Coefficients are stored for every basis blade of the algebra, ordered by
/// the `Axes` values they correspond to. There is no grade restriction; the
/// rotor-map functions in [`crate::maps`] document which grades they expect
/// and produce.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Multivector {
    /// Algebra that the multivector lives in.
    sig: Signature,
    /// Coefficients of the terms of the multivector, ordered by the `Axes`
    /// values they correspond to.
    coefficients: Box<[Float]>,
}

impl fmt::Debug for Multivector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Multivector[{:?}](", self.sig)?;
        super::display_multivector(f, self.nonzero_terms())?;
        write!(f, ")")
    }
}

impl fmt::Display for Multivector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::display_multivector(f, self.nonzero_terms())
    }
}

impl Multivector {
    /// Constructs the zero multivector.
    pub fn zero(sig: Signature) -> Self {
        Self {
            sig,
            coefficients: vec![0.0; sig.blade_count()].into_boxed_slice(),
        }
    }
    /// Constructs a scalar multivector.
    pub fn scalar(sig: Signature, x: Float) -> Self {
        let mut ret = Self::zero(sig);
        ret.set(Axes::SCALAR, x);
        ret
    }
    /// Constructs the multiplicative identity.
    pub fn one(sig: Signature) -> Self {
        Self::scalar(sig, 1.0)
    }

    /// Constructs a Euclidean rotation bivector from its components on the
    /// planes e₂₃, e₃₁, e₁₂.
    ///
    /// Note that e₃₁ = −e₁₃, so the coefficient stored for the `x|z` blade is
    /// the negation of `e31`.
    pub fn rotation_bivector(e23: Float, e31: Float, e12: Float) -> Self {
        let mut ret = Self::zero(Signature::Euclidean);
        ret.set(Axes::Y | Axes::Z, e23);
        ret.set(Axes::X | Axes::Z, -e31);
        ret.set(Axes::X | Axes::Y, e12);
        ret
    }

    /// Constructs a projective screw bivector from its ideal (translational)
    /// components on e₀₁, e₀₂, e₀₃ and its Euclidean (rotational) components
    /// on e₂₃, e₃₁, e₁₂.
    pub fn screw_bivector(ideal: [Float; 3], rotation: [Float; 3]) -> Self {
        let mut ret = Self::zero(Signature::Projective);
        ret.set(Axes::E0 | Axes::X, ideal[0]);
        ret.set(Axes::E0 | Axes::Y, ideal[1]);
        ret.set(Axes::E0 | Axes::Z, ideal[2]);
        ret.set(Axes::Y | Axes::Z, rotation[0]);
        ret.set(Axes::X | Axes::Z, -rotation[1]);
        ret.set(Axes::X | Axes::Y, rotation[2]);
        ret
    }

    /// Returns the signature of the algebra the multivector lives in.
    pub fn signature(&self) -> Signature {
        self.sig
    }

    /// Returns the coefficient for a blade, or zero if the blade does not
    /// exist in the algebra.
    pub fn get(&self, axes: Axes) -> Float {
        match self.sig.index_of(axes) {
            Some(i) => self.coefficients[i],
            None => 0.0,
        }
    }
    /// Sets the coefficient for a blade.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the blade does not exist in the algebra (an
    /// e₀ blade in a Euclidean multivector). In release mode, an error is
    /// logged instead and the multivector is not modified.
    fn set(&mut self, axes: Axes, value: Float) {
        match self.sig.index_of(axes) {
            Some(i) => self.coefficients[i] = value,
            None => debug_panic!("bad blade {axes} for signature {:?}", self.sig),
        }
    }

    /// Returns an iterator over the terms in the multivector.
    pub fn terms(&self) -> impl '_ + Clone + Iterator<Item = Term> {
        self.coefficients.iter().enumerate().map(|(i, &coef)| Term {
            coef,
            axes: self.sig.axes_at_index(i),
        })
    }
    /// Returns an iterator over the terms in the multivector that are
    /// approximately nonzero.
    pub fn nonzero_terms(&self) -> impl '_ + Clone + Iterator<Item = Term> {
        self.terms().filter(|term| !term.is_zero())
    }
    /// Returns whether the multivector is approximately zero.
    pub fn is_zero(&self) -> bool {
        !self.coefficients.iter().any(is_approx_nonzero)
    }

    /// Returns the scalar (grade-0) part of the multivector.
    pub fn scalar_part(&self) -> Float {
        self.coefficients[0]
    }

    /// Returns the grade projection ⟨X⟩ₖ of the multivector: the
    /// sub-multivector consisting only of basis blades of grade `grade`.
    #[must_use]
    pub fn grade_project(&self, grade: u8) -> Self {
        let mut ret = Self::zero(self.sig);
        for term in self.terms().filter(|t| t.grade() == grade) {
            ret.set(term.axes, term.coef);
        }
        ret
    }

    /// Returns the reverse multivector, which has the basis vectors of each
    /// term reversed.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut ret = self.clone();
        for (i, coef) in ret.coefficients.iter_mut().enumerate() {
            *coef *= self.sig.axes_at_index(i).sign_of_reverse();
        }
        ret
    }

    /// Lifts the multivector into at least the algebra of `sig`.
    #[must_use]
    pub fn to_signature_at_least(&self, sig: Signature) -> Self {
        if sig <= self.sig {
            self.clone()
        } else {
            let mut ret = Self::zero(sig);
            for term in self.terms() {
                ret += term;
            }
            ret
        }
    }

    /// Returns the closed-form inverse `X̃ (⟨XX̃⟩₀ − ⟨XX̃⟩₄) / ⟨XX̃⟩₀²`, or
    /// `None` if `⟨XX̃⟩₀` is zero.
    ///
    /// This is only a correct two-sided inverse for multivectors whose
    /// product with their reverse has no parts of grade 1, 2, or 3, which
    /// holds for the motors and bivector exponentials this crate works with.
    /// It is not a general-purpose multivector inverse.
    pub fn explicit_inverse(&self) -> Option<Self> {
        let rev = self.reverse();
        let product = self * &rev;
        let s = product.scalar_part();
        let correction = Self::scalar(self.sig, s) - product.grade_project(4);
        util::try_div(rev * correction, s * s)
    }
}

impl approx::AbsDiffEq for Multivector {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        crate::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.sig == other.sig
            && std::iter::zip(&self.coefficients[..], &other.coefficients[..])
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl AddAssign<Term> for Multivector {
    fn add_assign(&mut self, rhs: Term) {
        self.set(rhs.axes, self.get(rhs.axes) + rhs.coef);
    }
}
impl AddAssign<&Multivector> for Multivector {
    fn add_assign(&mut self, rhs: &Multivector) {
        if rhs.sig > self.sig {
            *self = self.to_signature_at_least(rhs.sig);
        }
        for term in rhs.terms() {
            *self += term;
        }
    }
}
impl AddAssign<Multivector> for Multivector {
    fn add_assign(&mut self, rhs: Multivector) {
        *self += &rhs;
    }
}
impl AddAssign<Float> for Multivector {
    fn add_assign(&mut self, rhs: Float) {
        self.coefficients[0] += rhs;
    }
}

impl SubAssign<Term> for Multivector {
    fn sub_assign(&mut self, rhs: Term) {
        self.set(rhs.axes, self.get(rhs.axes) - rhs.coef);
    }
}
impl SubAssign<&Multivector> for Multivector {
    fn sub_assign(&mut self, rhs: &Multivector) {
        if rhs.sig > self.sig {
            *self = self.to_signature_at_least(rhs.sig);
        }
        for term in rhs.terms() {
            *self -= term;
        }
    }
}
impl SubAssign<Multivector> for Multivector {
    fn sub_assign(&mut self, rhs: Multivector) {
        *self -= &rhs;
    }
}
impl SubAssign<Float> for Multivector {
    fn sub_assign(&mut self, rhs: Float) {
        self.coefficients[0] -= rhs;
    }
}

impl<T> Add<T> for Multivector
where
    Multivector: AddAssign<T>,
{
    type Output = Multivector;

    fn add(mut self, rhs: T) -> Self::Output {
        self += rhs;
        self
    }
}
impl<T> Sub<T> for Multivector
where
    Multivector: SubAssign<T>,
{
    type Output = Multivector;

    fn sub(mut self, rhs: T) -> Self::Output {
        self -= rhs;
        self
    }
}

/// Scalar plus multivector, so that formulas like `1.0 + phi` read the way
/// they are written in the paper.
impl Add<&Multivector> for Float {
    type Output = Multivector;

    fn add(self, rhs: &Multivector) -> Self::Output {
        rhs.clone() + self
    }
}
impl Add<Multivector> for Float {
    type Output = Multivector;

    fn add(self, rhs: Multivector) -> Self::Output {
        rhs + self
    }
}
/// Scalar minus multivector.
impl Sub<&Multivector> for Float {
    type Output = Multivector;

    fn sub(self, rhs: &Multivector) -> Self::Output {
        -rhs + self
    }
}
impl Sub<Multivector> for Float {
    type Output = Multivector;

    fn sub(self, rhs: Multivector) -> Self::Output {
        -rhs + self
    }
}

impl Mul<&Multivector> for &Multivector {
    type Output = Multivector;

    fn mul(self, rhs: &Multivector) -> Self::Output {
        let mut ret = Multivector::zero(Signature::merge(self.sig, rhs.sig));
        for l in self.terms() {
            for r in rhs.terms() {
                if let Some(product) = l * r {
                    ret += product;
                }
            }
        }
        ret
    }
}
impl Mul<Multivector> for &Multivector {
    type Output = Multivector;

    fn mul(self, rhs: Multivector) -> Self::Output {
        self * &rhs
    }
}
impl Mul<&Multivector> for Multivector {
    type Output = Multivector;

    fn mul(self, rhs: &Multivector) -> Self::Output {
        &self * rhs
    }
}
impl Mul<Multivector> for Multivector {
    type Output = Multivector;

    fn mul(self, rhs: Multivector) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<Float> for Multivector {
    type Output = Multivector;

    fn mul(mut self, rhs: Float) -> Self::Output {
        self *= rhs;
        self
    }
}
impl Mul<Float> for &Multivector {
    type Output = Multivector;

    fn mul(self, rhs: Float) -> Self::Output {
        self.clone() * rhs
    }
}
impl Mul<Multivector> for Float {
    type Output = Multivector;

    fn mul(self, rhs: Multivector) -> Self::Output {
        rhs * self
    }
}
impl Mul<&Multivector> for Float {
    type Output = Multivector;

    fn mul(self, rhs: &Multivector) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<Float> for Multivector {
    fn mul_assign(&mut self, rhs: Float) {
        for coef in &mut self.coefficients[..] {
            *coef *= rhs;
        }
    }
}

impl Neg for Multivector {
    type Output = Multivector;

    fn neg(mut self) -> Self::Output {
        for coef in &mut self.coefficients[..] {
            *coef = -*coef;
        }
        self
    }
}
impl Neg for &Multivector {
    type Output = Multivector;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_ops() {
        let phi = Multivector::rotation_bivector(0.1, 0.2, 0.3);
        let a = 1.0 + &phi;
        assert_eq!(a.scalar_part(), 1.0);
        assert_eq!(a.get(Axes::Y | Axes::Z), 0.1);
        let b = 1.0 - &phi;
        assert_eq!(b.scalar_part(), 1.0);
        assert_eq!(b.get(Axes::Y | Axes::Z), -0.1);
        assert!((a + b - 2.0).is_zero());
    }

    #[test]
    fn test_display_skips_negligible_terms() {
        let phi = Multivector::rotation_bivector(0.5, 1e-9, -0.25);
        assert_eq!(phi.to_string(), "-0.25 xy + 0.5 yz");
        assert_eq!(Multivector::zero(Signature::Projective).to_string(), "0");
    }

    #[test]
    fn test_is_zero_uses_epsilon() {
        assert!(Multivector::rotation_bivector(1e-9, 0.0, 0.0).is_zero());
        assert!(!Multivector::rotation_bivector(1e-3, 0.0, 0.0).is_zero());
    }

    #[test]
    fn test_geometric_product_bivector_square() {
        // A Euclidean bivector squares to a negative scalar.
        let phi = Multivector::rotation_bivector(0.1, 0.2, 0.3);
        let sq = &phi * &phi;
        assert_approx_eq!(sq.scalar_part(), -0.14);
        assert!(sq.grade_project(2).is_zero());
    }

    #[test]
    fn test_screw_bivector_square_has_grade_4_part() {
        let phi = Multivector::screw_bivector([0.1, 0.2, 0.3], [0.1, 0.2, 0.3]);
        let sq = &phi * &phi;
        assert_approx_eq!(sq.scalar_part(), -0.14);
        // ⟨φ²⟩₄ = 2(e01·e23 + e02·e31 + e03·e12) e₀₁₂₃
        assert_approx_eq!(sq.get(Axes::E0XYZ), 0.28);
        assert!(sq.grade_project(2).is_zero());
    }

    #[test]
    fn test_reverse() {
        let phi = Multivector::screw_bivector([0.5, -0.25, 1.0], [1.0, 2.0, 3.0]);
        assert_approx_eq!(phi.reverse(), -phi.clone());
        let s = Multivector::scalar(Signature::Projective, 2.5);
        assert_approx_eq!(s.reverse(), s);
    }

    #[test]
    fn test_grade_project() {
        let phi = Multivector::rotation_bivector(1.0, 2.0, 3.0);
        let m = 1.0 + &phi;
        assert_approx_eq!(m.grade_project(2), phi);
        assert_approx_eq!(
            m.grade_project(0),
            Multivector::one(Signature::Euclidean)
        );
        assert!(m.grade_project(3).is_zero());
    }

    #[test]
    fn test_signature_promotion() {
        let a = Multivector::rotation_bivector(0.1, 0.2, 0.3);
        let b = Multivector::screw_bivector([0.4, 0.5, 0.6], [0.0, 0.0, 0.0]);
        let product = &a * &b;
        assert_eq!(product.signature(), Signature::Projective);
        let sum = a + &b;
        assert_eq!(sum.signature(), Signature::Projective);
        assert_eq!(sum.get(Axes::E0 | Axes::X), 0.4);
        assert_eq!(sum.get(Axes::Y | Axes::Z), 0.1);
    }

    #[test]
    fn test_explicit_inverse() {
        let phi = Multivector::screw_bivector([0.1, 0.2, 0.3], [0.1, 0.2, 0.3]);
        let x = 1.0 - &phi;
        let inv = x.explicit_inverse().unwrap();
        assert_approx_eq!(&x * &inv, Multivector::one(Signature::Projective));
        assert_approx_eq!(&inv * &x, Multivector::one(Signature::Projective));
    }

    #[test]
    fn test_explicit_inverse_of_zero() {
        assert!(Multivector::zero(Signature::Projective)
            .explicit_inverse()
            .is_none());
    }
}
