//! # ssrestraints
//!
//! Base-pair restraints for structure refinement from an RNA sequence and
//! its (possibly pseudoknotted) dot-bracket structure.
//!
//! This crate re-exports the main functionality from its submodules.

pub mod input_parsers;
pub mod restraint_parsers;

pub mod structure {
    pub use ::ssr_structure::*;
}

pub mod restraints {
    pub use ::ssr_restraints::*;
}
