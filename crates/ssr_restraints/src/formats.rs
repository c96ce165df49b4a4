//! Restraint output for QRNAS (`BASEPAIR` lines) and Phenix (`.eff`
//! parameter blocks).

use clap::ValueEnum;

use crate::Restraint;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// QRNAS `BASEPAIR` lines
    Qrnas,
    /// Phenix `.eff` parameter block
    #[default]
    Phenix,
    /// QRNAS lines, then the Phenix block
    Both,
}

impl OutputFormat {
    pub fn wants_qrnas(&self) -> bool {
        matches!(self, OutputFormat::Qrnas | OutputFormat::Both)
    }

    pub fn wants_phenix(&self) -> bool {
        matches!(self, OutputFormat::Phenix | OutputFormat::Both)
    }
}

/// One `BASEPAIR` line per restraint. Saenger classes are not part of
/// this format.
pub fn qrnas_lines(restraints: &[Restraint], chain: &str) -> Vec<String> {
    restraints.iter()
        .map(|r| format!("BASEPAIR   {chain}/{}   {chain}/{}", r.i, r.j))
        .collect()
}

/// A `pdb_interpretation` block with one `base_pair` entry per restraint.
pub fn phenix_block(restraints: &[Restraint], chain: &str) -> String {
    let mut out = vec![
        "pdb_interpretation {".to_string(),
        "  secondary_structure {".to_string(),
        "    nucleic_acid {".to_string(),
    ];

    for r in restraints {
        out.push("      base_pair {".to_string());
        out.push(format!("        base1 = chain '{}' and resid {}", chain, r.i));
        out.push(format!("        base2 = chain '{}' and resid {}", chain, r.j));
        if let Some(class) = r.saenger {
            out.push(format!("        saenger_class = {}", class));
        }
        out.push("      }".to_string());
    }

    out.push("    }".to_string());
    out.push("  }".to_string());
    out.push("}".to_string());
    out.join("\n")
}

/// The complete output text (without trailing newline). With
/// [`OutputFormat::Both`] the QRNAS lines come first, separated from the
/// Phenix block by an empty line.
pub fn render(format: OutputFormat, restraints: &[Restraint], chain: &str) -> String {
    let mut sections: Vec<String> = Vec::new();
    if format.wants_qrnas() {
        sections.push(qrnas_lines(restraints, chain).join("\n"));
    }
    if format.wants_phenix() {
        sections.push(phenix_block(restraints, chain));
    }
    sections.join("\n\n")
}
