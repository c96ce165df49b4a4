use std::fs::File;
use std::io::{stdin, BufRead, BufReader, Cursor};
use std::path::Path;

use anyhow::Result;
use colored::*;
use log::{debug, warn};
use paste::paste;
use ssr_structure::DotBracketVec;
use ssr_restraints::NucleotideVec;

// ============================================================
//  Base parser functions
// ============================================================

/// Read a FASTA file. All sequence lines are concatenated (multiple
/// records are merged with a warning), anything that is not a nucleotide is
/// dropped with a warning.
pub fn read_fasta<R: BufRead>(reader: R) -> Result<(Option<String>, NucleotideVec)> {
    let mut header: Option<String> = None;
    let mut sequence = NucleotideVec::default();
    let mut dropped = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('>') {
            if header.is_some() {
                warn!("{} additional FASTA record {} is appended to the sequence",
                    "WARNING:".red(), line);
            } else {
                header = Some(line.to_string());
            }
        } else {
            dropped += sequence.extend_lossy(line);
        }
    }

    if dropped > 0 {
        warn!("{} dropped {} non-nucleotide symbol(s) from the sequence",
            "WARNING:".red(), dropped);
    }
    if sequence.is_empty() {
        warn!("{} no nucleotides found in the sequence input", "WARNING:".red());
    }
    debug!("Read sequence of length {}", sequence.len());

    Ok((header, sequence))
}

/// Strip a trailing free energy annotation such as `(-3.40)` or
/// `( -12.10)`, as written by RNAfold.
fn strip_energy(line: &str) -> &str {
    let Some(open) = line.rfind('(') else {
        return line;
    };
    let (head, tail) = line.split_at(open);
    let energy = tail.trim_end();
    let is_energy = energy.strip_prefix('(')
        .and_then(|e| e.strip_suffix(')'))
        .is_some_and(|e| e.trim().parse::<f64>().is_ok());
    if is_energy { head } else { line }
}

/// Read a dot-bracket structure. Header lines (`>`) are skipped and a
/// trailing free energy annotation is removed from every other line.
/// Symbols outside the dot-bracket alphabet are stripped.
pub fn read_dotbracket<R: BufRead>(reader: R) -> Result<DotBracketVec> {
    let mut symbols = String::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('>') {
            continue;
        }
        symbols.push_str(strip_energy(line));
    }

    let structure = DotBracketVec::from_lossy(&symbols);
    debug!("Read structure of length {}", structure.len());
    Ok(structure)
}

// ============================================================
//  Macro generating file/string/stdin/input helpers
// ============================================================

/// Generate input adapters for a base parser function `fn base<R: BufRead>(R) -> Result<T>`.
///
/// This expands into:
/// - `base_string(&str)`
/// - `base_file<P: AsRef<Path>>(P)`
/// - `base_stdin()`
/// - `base_input(&str)`  (dispatches "-" → stdin, otherwise → file)
///
/// Example:
/// ```ignore
/// define_input_variants!(read_dotbracket, Result<DotBracketVec>);
/// ```
macro_rules! define_input_variants {
    ($base:ident, $ret:ty) => {
        paste! {
            /// Read from a string buffer.
            pub fn [<$base _string>](s: &str) -> $ret {
                $base(Cursor::new(s))
            }

            /// Read from a file path.
            pub fn [<$base _file>]<P: AsRef<Path>>(path: P) -> $ret {
                let reader = BufReader::new(File::open(path)?);
                $base(reader)
            }

            /// Read from stdin.
            pub fn [<$base _stdin>]() -> $ret {
                let reader = BufReader::new(stdin());
                $base(reader)
            }

            /// Read either from stdin ("-") or a file path.
            pub fn [<$base _input>](s: &str) -> $ret {
                if s == "-" {
                    [<$base _stdin>]()
                } else {
                    [<$base _file>](s)
                }
            }
        }
    };
}

// ============================================================
//  Apply macro to generate adapters for both inputs
// ============================================================

type FastaResult = Result<(Option<String>, NucleotideVec)>;
type DotBracketResult = Result<DotBracketVec>;

define_input_variants!(read_fasta, FastaResult);
define_input_variants!(read_dotbracket, DotBracketResult);

// ============================================================
//  Unit tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_fasta_basic() {
        let input = ">6hbc chain B\nGGGA\nAACCC\n\n";
        let (hdr, seq) = read_fasta_string(input).unwrap();
        assert_eq!(hdr, Some(">6hbc chain B".into()));
        assert_eq!(seq.to_string(), "GGGAAACCC");
    }

    #[test]
    fn test_read_fasta_lossy() {
        let input = ">x\nggg-aat\nCC C*\n";
        let (_, seq) = read_fasta_string(input).unwrap();
        assert_eq!(seq.to_string(), "GGGAAUCCC");
    }

    #[test]
    fn test_read_fasta_without_header() {
        let (hdr, seq) = read_fasta_string("ACGU\n").unwrap();
        assert_eq!(hdr, None);
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn test_read_fasta_multiple_records() {
        let (hdr, seq) = read_fasta_string(">a\nGG\n>b\nCC\n").unwrap();
        assert_eq!(hdr, Some(">a".into()));
        assert_eq!(seq.to_string(), "GGCC");
    }

    #[test]
    fn test_read_dotbracket_plain() {
        let dbv = read_dotbracket_string("((..[[..))..]]\n").unwrap();
        assert_eq!(dbv.to_string(), "((..[[..))..]]");
    }

    #[test]
    fn test_read_dotbracket_vienna_style() {
        let input = ">seq\nGGGAAACCC\n(((...))) (-3.40)\n";
        let dbv = read_dotbracket_string(input).unwrap();
        assert_eq!(dbv.to_string(), "(((...)))");
    }

    #[test]
    fn test_read_dotbracket_spaces_within_line() {
        let dbv = read_dotbracket_string("((..)) ((..))\n").unwrap();
        assert_eq!(dbv.to_string(), "((..))((..))");
        assert_eq!(dbv.pair_list().unwrap().len(), 4);

        let dbv = read_dotbracket_string("((((.... ....))))").unwrap();
        assert_eq!(dbv.len(), 16);
    }

    #[test]
    fn test_read_dotbracket_energy_annotations() {
        let dbv = read_dotbracket_string("((...)) ( -1.20)\n").unwrap();
        assert_eq!(dbv.to_string(), "((...))");

        let dbv = read_dotbracket_string("((...))(-0.5)\n").unwrap();
        assert_eq!(dbv.to_string(), "((...))");

        // a bracket group that is not a number stays part of the structure
        let dbv = read_dotbracket_string("((...)) (.)\n").unwrap();
        assert_eq!(dbv.to_string(), "((...))(.)");
    }

    #[test]
    fn test_strip_energy() {
        assert_eq!(strip_energy("(((...))) (-3.40)"), "(((...))) ");
        assert_eq!(strip_energy("(((...)))"), "(((...)))");
        assert_eq!(strip_energy("(((...)))  (  0.00)  "), "(((...)))  ");
        assert_eq!(strip_energy("..(..)"), "..(..)");
    }

    #[test]
    fn test_read_dotbracket_wrapped_lines() {
        let dbv = read_dotbracket_string("((((....\n....))))\n").unwrap();
        assert_eq!(dbv.len(), 16);
        assert_eq!(dbv.num_brackets(), 8);
    }

    #[test]
    fn test_read_missing_file() {
        assert!(read_fasta_file("/nonexistent/input.fasta").is_err());
        assert!(read_dotbracket_input("/nonexistent/structure.db").is_err());
    }
}
