use std::fmt;
use log::warn;
use colored::*;

use ssr_structure::RESNUM;
use ssr_structure::PairList;

use crate::Base;
use crate::BCOUNT;

/// Saenger classes of the cis Watson-Crick/Watson-Crick pairs that can be
/// inferred from base identities alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SaengerClass {
    GC = 19,
    AU = 20,
    GU = 28,
}

/// Saenger numbers run from I to XXVIII.
pub const SAENGER_MAX: u8 = 28;

const SAENGER_LOOKUP: [[Option<SaengerClass>; BCOUNT]; BCOUNT] = {
    use Base::*;
    use SaengerClass::*;
    let mut table = [[None; BCOUNT]; BCOUNT];
    table[G as usize][C as usize] = Some(GC);
    table[C as usize][G as usize] = Some(GC);
    table[A as usize][U as usize] = Some(AU);
    table[U as usize][A as usize] = Some(AU);
    table[G as usize][U as usize] = Some(GU);
    table[U as usize][G as usize] = Some(GU);
    table
};

impl SaengerClass {
    /// Unordered lookup of a base combination.
    pub fn infer(b1: Base, b2: Base) -> Option<SaengerClass> {
        SAENGER_LOOKUP[b1 as usize][b2 as usize]
    }

    pub fn number(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for SaengerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Why a restraint ended up without a Saenger class.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClassIssue {
    OutOfRange { length: usize },
    NonCanonical(Base, Base),
}

/// A base pair in residue numbering, with its resolved Saenger class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Restraint {
    pub i: RESNUM,
    pub j: RESNUM,
    pub saenger: Option<u8>,
    pub issue: Option<ClassIssue>,
}

impl Restraint {
    pub fn new(i: RESNUM, j: RESNUM, saenger: Option<u8>) -> Self {
        Restraint { i, j, saenger, issue: None }
    }
}

/// Resolve a Saenger class for every pair. Pairs outside the sequence or
/// with non-canonical bases get no class and a warning.
pub fn infer_restraints(pairs: &PairList, sequence: &[Base], start: RESNUM) -> Vec<Restraint> {
    let n = sequence.len();
    pairs.iter().map(|p| {
        let (i, j) = p.residues(start);

        if p.j() >= n {
            warn!("{} residues {}, {} out of range for sequence length {}",
                "WARNING:".red(), i, j, n);
            return Restraint {
                issue: Some(ClassIssue::OutOfRange { length: n }),
                ..Restraint::new(i, j, None)
            };
        }

        let (b1, b2) = (sequence[p.i()], sequence[p.j()]);
        match SaengerClass::infer(b1, b2) {
            Some(class) => Restraint::new(i, j, Some(class.number())),
            None => {
                warn!("{} cannot infer Saenger class for {}-{} (residues {}, {})",
                    "WARNING:".red(), b1, b2, i, j);
                Restraint {
                    issue: Some(ClassIssue::NonCanonical(b1, b2)),
                    ..Restraint::new(i, j, None)
                }
            }
        }
    }).collect()
}

/// Replace every class with an explicit choice, including unresolved ones.
pub fn apply_override(restraints: &mut [Restraint], class: u8) {
    debug_assert!((1..=SAENGER_MAX).contains(&class));
    for r in restraints.iter_mut() {
        r.saenger = Some(class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Base::*;

    fn seq(s: &str) -> Vec<Base> {
        s.chars().map(|c| Base::try_from(c).unwrap()).collect()
    }

    #[test]
    fn test_infer_canonical_either_order() {
        assert_eq!(SaengerClass::infer(G, C), Some(SaengerClass::GC));
        assert_eq!(SaengerClass::infer(C, G), Some(SaengerClass::GC));
        assert_eq!(SaengerClass::infer(A, U), Some(SaengerClass::AU));
        assert_eq!(SaengerClass::infer(U, A), Some(SaengerClass::AU));
        assert_eq!(SaengerClass::infer(G, U), Some(SaengerClass::GU));
        assert_eq!(SaengerClass::infer(U, G), Some(SaengerClass::GU));
    }

    #[test]
    fn test_class_numbers() {
        assert_eq!(SaengerClass::GC.number(), 19);
        assert_eq!(SaengerClass::AU.number(), 20);
        assert_eq!(SaengerClass::GU.number(), 28);
        assert_eq!(SaengerClass::GU.to_string(), "28");
    }

    #[test]
    fn test_infer_non_canonical() {
        assert_eq!(SaengerClass::infer(A, G), None);
        assert_eq!(SaengerClass::infer(G, A), None);
        assert_eq!(SaengerClass::infer(C, U), None);
        assert_eq!(SaengerClass::infer(A, A), None);
    }

    #[test]
    fn test_infer_restraints_thymine_as_uracil() {
        let pairs = PairList::try_from("((..))").unwrap();
        let rs = infer_restraints(&pairs, &seq("GTAAAC"), 1);
        assert_eq!(rs, vec![
            Restraint::new(1, 6, Some(19)),
            Restraint::new(2, 5, Some(20)),
        ]);
    }

    #[test]
    fn test_infer_restraints_with_issues() {
        let pairs = PairList::try_from("(((...)))").unwrap();
        let rs = infer_restraints(&pairs, &seq("GAGAAAUGC"), 5);
        assert_eq!(rs[0].saenger, Some(19));
        assert_eq!((rs[1].i, rs[1].j), (6, 12));
        assert_eq!(rs[1].saenger, None);
        assert_eq!(rs[1].issue, Some(ClassIssue::NonCanonical(A, G)));
        assert_eq!(rs[2].saenger, Some(28));
    }

    #[test]
    fn test_infer_restraints_out_of_range() {
        let pairs = PairList::try_from("((....))").unwrap();
        let rs = infer_restraints(&pairs, &seq("GGAAAAC"), 1);
        assert_eq!(rs[0].saenger, None);
        assert_eq!(rs[0].issue, Some(ClassIssue::OutOfRange { length: 7 }));
        assert_eq!(rs[1].saenger, Some(19));
        assert_eq!(rs[1].issue, None);
    }

    #[test]
    fn test_apply_override() {
        let pairs = PairList::try_from("(((...)))").unwrap();
        let mut rs = infer_restraints(&pairs, &seq("GAGAAAUGC"), 1);
        apply_override(&mut rs, 20);
        assert!(rs.iter().all(|r| r.saenger == Some(20)));
        assert_eq!(rs[1].issue, Some(ClassIssue::NonCanonical(A, G)));
    }
}
