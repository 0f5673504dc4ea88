//! Self-contained multivector arithmetic for the 3D Euclidean geometric
//! algebra Cl(3) and the 3D projective geometric algebra Cl(3,0,1).
//!
//! The representation is a dense coefficient table keyed by [`Axes`], a
//! bitmask of basis vectors. [`Term`] pairs one coefficient with one basis
//! blade; [`Multivector`] is a sum of terms with no grade restriction.

use std::fmt;

mod axes;
mod multivector;
mod term;

pub use axes::Axes;
pub use multivector::{Multivector, Signature};
pub use term::Term;

/// Formats a sum of terms, writing `0` if the iterator is empty.
pub(crate) fn display_multivector(
    f: &mut fmt::Formatter<'_>,
    terms: impl Iterator<Item = Term>,
) -> fmt::Result {
    let mut is_first = true;
    for term in terms {
        if !is_first {
            write!(f, " + ")?;
        }
        is_first = false;
        fmt::Display::fmt(&term, f)?;
    }
    if is_first {
        write!(f, "0")?;
    }
    Ok(())
}
