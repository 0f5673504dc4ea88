use crate::algebra::Multivector;
use crate::util;

/// Outer exponential from a bivector to a rotor/motor:
/// `(1 + φ + ½⟨φ²⟩₄) / √(1 − ⟨φ²⟩₀)`.
///
/// The grade-4 correction vanishes for a Euclidean bivector, leaving the
/// SO(3) form `(1+φ) / √(1−⟨φ²⟩₀)`. The result is a unit rotor/motor.
///
/// Returns `None` if `⟨φ²⟩₀ ≥ 1` (cannot happen for a real bivector
/// argument, whose square has a non-positive scalar part).
pub fn outer_exp(phi: &Multivector) -> Option<Multivector> {
    let phi2 = phi * phi;
    let numerator = 1.0 + phi + 0.5 * phi2.grade_project(4);
    let denominator = util::try_sqrt(1.0 - phi2.scalar_part())?;
    util::try_div(numerator, denominator)
}

/// Outer logarithm `⟨R⟩₂ / ⟨R⟩₀`: recovers the bivector whose outer
/// exponential is the given rotor/motor. Left inverse of [`outer_exp`].
///
/// Returns `None` if the scalar part of `R` is zero (R a rotation by π).
pub fn outer_log(r: &Multivector) -> Option<Multivector> {
    Some(r.grade_project(2) * util::try_recip(r.scalar_part())?)
}

/// Kinematic equation for the outer exponential: the rate of change `φ̇` of
/// the bivector parameter, given the current parameter `φ` and the velocity
/// bivector `ω`, as `−½√(1−⟨φ²⟩₀) (−⟨ωR⟩₂ + ⟨ωR⟩₀⟨R⟩₂/⟨R⟩₀)` where
/// `R = outer_exp(φ)`.
///
/// The result is consistent with the rotor evolution `Ṙ = ½ωR`
/// (space-frame velocity).
///
/// Returns `None` under the same conditions as [`outer_exp`].
pub fn outer_exp_kinematic(phi: &Multivector, omega: &Multivector) -> Option<Multivector> {
    let r = outer_exp(phi)?;
    let omega_r = omega * &r;
    let scale = util::try_sqrt(1.0 - (phi * phi).scalar_part())?;
    let tangent = outer_log(&r)?;
    Some(
        -0.5 * scale
            * (-omega_r.grade_project(2) + omega_r.scalar_part() * tangent),
    )
}
