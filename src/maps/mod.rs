//! Closed-form maps between bivectors and rotors/motors.
//!
//! Two competing constructions from Hadfield & Lasenby, "Screw Theory in
//! Geometric Algebra for Constrained Rigid Body Dynamics" (AACA 2021):
//!
//! - the **Cayley map** `(1+φ)(1−φ)⁻¹`, a rational bijection between
//!   bivectors and rotors/motors;
//! - the **outer exponential**, an exponential-like map built on the outer
//!   product structure that avoids the true exponential series.
//!
//! Every map is a pure function of one or two [`Multivector`]s. The input
//! `φ` is expected to be a bivector: Euclidean
//! ([`Multivector::rotation_bivector`]) for SO(3), projective
//! ([`Multivector::screw_bivector`]) for SE(3); the grade-4 correction terms
//! vanish in the Euclidean algebra, so each function covers both groups.
//!
//! The maps are only defined where `s = ⟨φ²⟩₀ < 1` (for real bivector
//! arguments `s ≤ 0`, so this always holds). Functions that divide or take a
//! square root return `Option` and yield `None` outside their domain; no
//! other validation is performed, and no attempt is made to recover.

mod cayley;
mod outer;

pub use cayley::{cayley, cayley_kinematic, cayley_log, cayley_unsimplified};
pub use outer::{outer_exp, outer_exp_kinematic, outer_log};
