/// Nucleotides and sequences read from FASTA input.
mod nucleotides;

/// Saenger classes and their inference from base identities.
mod saenger;

/// QRNAS and Phenix restraint output.
pub mod formats;

pub use nucleotides::*;
pub use saenger::*;
pub use formats::OutputFormat;
