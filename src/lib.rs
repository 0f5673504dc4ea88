//! Closed-form maps between screw bivectors and rotors/motors in 3D
//! geometric algebra.
//!
//! This crate implements the Cayley map and the outer exponential from
//! Hadfield & Lasenby, "Screw Theory in Geometric Algebra for Constrained
//! Rigid Body Dynamics" (AACA 2021), together with their kinematic
//! (time-derivative) companions and logarithms. Each map takes a bivector
//! (a rotation plane in the Euclidean algebra Cl(3), or a screw axis in the
//! projective algebra Cl(3,0,1)) and produces a rotor or motor.
//!
//! The algebra itself is a small self-contained multivector implementation
//! in [`algebra`]; the maps live in [`maps`].

pub use approx;

/// Floating-point type used for multivector coefficients.
pub type Float = f64;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.000001;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => log::error!($($tok)*),
        }
    };
}

pub mod algebra;
pub mod approx_cmp;
pub mod maps;
pub mod util;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::algebra::{Axes, Multivector, Signature, Term};
    pub use crate::approx_cmp::*;
    pub use crate::maps;
    pub use crate::{Float, EPSILON};
}
pub use prelude::*;
