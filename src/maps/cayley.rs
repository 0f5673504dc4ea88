use crate::algebra::Multivector;
use crate::util;

/// Cayley map from a bivector to a rotor/motor, in simplified form:
/// `(1+φ)² (d + ⟨φ²⟩₄) / d²` where `d = 1 − ⟨φ²⟩₀`.
///
/// For a Euclidean bivector `⟨φ²⟩₄ = 0` and this reduces to the familiar
/// SO(3) form `(1+φ)² / (1−⟨φ²⟩₀)`; for a projective (screw) bivector the
/// grade-4 term corrects for the e₀₁₂₃ component of `φ²`.
///
/// Returns `None` if `⟨φ²⟩₀ = 1` (cannot happen for a real bivector
/// argument, whose square has a non-positive scalar part).
pub fn cayley(phi: &Multivector) -> Option<Multivector> {
    let phi2 = phi * phi;
    let d = 1.0 - phi2.scalar_part();
    let numerator = (1.0 + phi) * (1.0 + phi) * (d + phi2.grade_project(4));
    util::try_div(numerator, d * d)
}

/// Cayley map in its unsimplified bidirectional form `(1+φ)(1−φ)⁻¹`, using
/// the closed-form inverse [`Multivector::explicit_inverse`].
///
/// Agrees with [`cayley`] wherever both are defined; kept as the ground
/// truth that the simplified form is checked against.
pub fn cayley_unsimplified(phi: &Multivector) -> Option<Multivector> {
    let inverse = (1.0 - phi).explicit_inverse()?;
    Some((1.0 + phi) * inverse)
}

/// Inverse Cayley map: recovers the bivector whose Cayley map is the given
/// rotor/motor, as `−⟨(1−R)(1+R)⁻¹⟩₂`.
///
/// Returns `None` if `1+R` is not invertible (R a rotation by π).
pub fn cayley_log(r: &Multivector) -> Option<Multivector> {
    let inverse = (1.0 + r).explicit_inverse()?;
    Some(-((1.0 - r) * inverse).grade_project(2))
}

/// Kinematic equation for the Cayley map: the rate of change `φ̇` of the
/// bivector parameter, given the current parameter `φ` and the velocity
/// bivector `ω`, as `¼(1+φ)ω(1−φ)`.
///
/// The result is consistent with the rotor evolution `Ṙ = ½Rω` (body-frame
/// velocity); integrate `φ` with it to track an orientation over time.
pub fn cayley_kinematic(phi: &Multivector, omega: &Multivector) -> Multivector {
    0.25 * ((1.0 + phi) * omega * (1.0 - phi))
}
