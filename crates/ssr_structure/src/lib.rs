//! Secondary structure representations for restraint generation.
//!
//! A dot-bracket string is read into a [`DotBracketVec`] and matched into a
//! sorted [`PairList`]. All four bracket kinds (`()`, `[]`, `{}`, `<>`) are
//! matched independently, so pseudoknots come out as ordinary pairs.

mod error;
mod dotbracket;
mod pair_list;

pub use error::*;
pub use dotbracket::*;
pub use pair_list::*;

/// Residue numbers as written into restraint files. Signed, because PDB
/// numbering may start at zero or below.
pub type RESNUM = i64;
