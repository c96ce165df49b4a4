use clap::Args;
use colored::*;
use anyhow::Result;
use anyhow::bail;
use anyhow::anyhow;
use log::{debug, info, warn};

use ssr_structure::RESNUM;
use ssr_structure::DotBracketVec;
use ssr_restraints::Restraint;
use ssr_restraints::OutputFormat;
use ssr_restraints::NucleotideVec;
use ssr_restraints::SAENGER_MAX;
use ssr_restraints::infer_restraints;
use ssr_restraints::apply_override;

/// Restraint output parameters.
#[derive(Debug, Args)]
pub struct RestraintArguments {
    /// PDB chain identifier
    #[arg(short, long, default_value = "A")]
    pub chain: String,

    /// Residue number of the first nucleotide
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub start: RESNUM,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Phenix)]
    pub format: OutputFormat,

    /// Use this Saenger class for all base pairs instead of inferring it
    #[arg(long, value_name = "CLASS",
        value_parser = clap::value_parser!(u8).range(1..=SAENGER_MAX as i64))]
    pub saenger: Option<u8>,
}

impl RestraintArguments {
    /// Validate that all parameters make sense.
    pub fn validate(&self) -> Result<()> {
        if self.chain.trim().is_empty() {
            bail!("chain identifier must not be empty");
        }
        if self.chain.chars().any(char::is_whitespace) {
            bail!("chain identifier must not contain whitespace (got '{}')", self.chain);
        }
        Ok(())
    }

    /// Match the structure into base pairs and resolve their Saenger
    /// classes. Unbalanced brackets are the only hard failure here.
    pub fn build_restraints(
        &self,
        sequence: &NucleotideVec,
        structure: &DotBracketVec,
    ) -> Result<Vec<Restraint>> {
        debug!("Chain: {}, first residue: {}", self.chain, self.start);

        if sequence.len() != structure.len() {
            warn!("{} sequence length ({}) and structure length ({}) do not match",
                "WARNING:".red(), sequence.len(), structure.len());
        }

        let pairs = structure.pair_list()
            .map_err(|e| anyhow!(e.residue_message(self.start)))?;
        info!("{} base pairs in a structure of length {}", pairs.len(), structure.len());
        if structure.has_pseudoknots() {
            let kinds: String = structure.bracket_kinds().iter()
                .map(|b| format!("{}{}", b.open(), b.close()))
                .collect::<Vec<_>>()
                .join(" ");
            info!("Pseudoknotted structure, bracket kinds: {}", kinds);
        }
        if pairs.is_empty() {
            warn!("{} the structure contains no base pairs", "WARNING:".red());
        }

        let mut restraints = infer_restraints(&pairs, sequence, self.start);
        if let Some(class) = self.saenger {
            debug!("Overriding all Saenger classes with {}", class);
            apply_override(&mut restraints, class);
        }
        Ok(restraints)
    }
}
