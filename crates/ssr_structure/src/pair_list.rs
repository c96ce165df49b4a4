//! Pair and PairList definitions.
//!
//! A `PairList` is the sorted list of base pairs encoded by a dot-bracket
//! structure. Positions are 0-based indices into the structure; residue
//! numbers for restraint files are obtained by adding a start offset.

use std::ops::Deref;
use std::convert::TryFrom;
use log::debug;

use crate::RESNUM;
use crate::Bracket;
use crate::BRACKET_KINDS;
use crate::DotBracket;
use crate::DotBracketVec;
use crate::StructureError;

/// A base pair (i, j) with i < j.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair {
    i: usize,
    j: usize,
}

impl Pair {
    /// Create a new pair (i, j). Panics in debug if i >= j.
    pub fn new(i: usize, j: usize) -> Self {
        debug_assert!(i < j);
        Pair { i, j }
    }

    /// Return the 5'-side position.
    pub fn i(&self) -> usize {
        self.i
    }

    /// Return the 3'-side position.
    pub fn j(&self) -> usize {
        self.j
    }

    /// Residue numbers of both positions, given the number of the first
    /// nucleotide.
    pub fn residues(&self, start: RESNUM) -> (RESNUM, RESNUM) {
        (start + self.i as RESNUM, start + self.j as RESNUM)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairList {
    length: usize,
    pairs: Vec<Pair>,
}

impl PairList {
    /// Length of the underlying structure.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Residue-numbered pairs, sorted by first index.
    pub fn residue_pairs(&self, start: RESNUM) -> Vec<(RESNUM, RESNUM)> {
        self.pairs.iter().map(|p| p.residues(start)).collect()
    }
}

impl Deref for PairList {
    type Target = [Pair];

    fn deref(&self) -> &Self::Target {
        &self.pairs
    }
}

impl TryFrom<&DotBracketVec> for PairList {
    type Error = StructureError;

    fn try_from(db: &DotBracketVec) -> Result<Self, Self::Error> {
        let mut stacks: [Vec<usize>; BRACKET_KINDS] = Default::default();
        let mut pairs = Vec::with_capacity(db.num_brackets() / 2);

        for (i, dot) in db.iter().enumerate() {
            match dot {
                DotBracket::Open(b) => stacks[*b as usize].push(i),
                DotBracket::Close(b) => {
                    let j = stacks[*b as usize].pop()
                        .ok_or(StructureError::UnmatchedClose(b.close(), i))?;
                    pairs.push(Pair::new(j, i));
                }
                DotBracket::Unpaired => {}
            }
        }

        for b in Bracket::ALL {
            let open = &stacks[b as usize];
            if !open.is_empty() {
                return Err(StructureError::UnmatchedOpen(b.open(), open.clone()));
            }
        }

        pairs.sort_unstable();
        debug!("Matched {} base pairs in structure of length {}", pairs.len(), db.len());
        Ok(PairList { length: db.len(), pairs })
    }
}

impl TryFrom<&str> for PairList {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        PairList::try_from(&DotBracketVec::try_from(s)?)
    }
}
