use std::fmt;
use std::ops::Deref;
use std::convert::TryFrom;

use crate::PairList;
use crate::StructureError;

/// The four bracket kinds of extended dot-bracket notation. Each kind is
/// matched independently of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bracket {
    Round,  // ()
    Square, // []
    Curly,  // {}
    Angle,  // <>
}
pub const BRACKET_KINDS: usize = 4;

impl Bracket {
    pub const ALL: [Bracket; BRACKET_KINDS] = [
        Bracket::Round,
        Bracket::Square,
        Bracket::Curly,
        Bracket::Angle,
    ];

    pub fn open(&self) -> char {
        match self {
            Bracket::Round => '(',
            Bracket::Square => '[',
            Bracket::Curly => '{',
            Bracket::Angle => '<',
        }
    }

    pub fn close(&self) -> char {
        match self {
            Bracket::Round => ')',
            Bracket::Square => ']',
            Bracket::Curly => '}',
            Bracket::Angle => '>',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DotBracket {
    Unpaired,       // '.'
    Open(Bracket),  // '(', '[', '{', '<'
    Close(Bracket), // ')', ']', '}', '>'
}

impl DotBracket {
    pub fn is_bracket(&self) -> bool {
        !matches!(self, DotBracket::Unpaired)
    }
}

impl TryFrom<char> for DotBracket {
    type Error = StructureError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(DotBracket::Unpaired),
            '(' => Ok(DotBracket::Open(Bracket::Round)),
            ')' => Ok(DotBracket::Close(Bracket::Round)),
            '[' => Ok(DotBracket::Open(Bracket::Square)),
            ']' => Ok(DotBracket::Close(Bracket::Square)),
            '{' => Ok(DotBracket::Open(Bracket::Curly)),
            '}' => Ok(DotBracket::Close(Bracket::Curly)),
            '<' => Ok(DotBracket::Open(Bracket::Angle)),
            '>' => Ok(DotBracket::Close(Bracket::Angle)),
            _ => Err(StructureError::InvalidToken(
                format!("character '{}'", c), "dot-bracket".into(), 0)),
        }
    }
}

impl From<DotBracket> for char {
    fn from(db: DotBracket) -> Self {
        match db {
            DotBracket::Unpaired => '.',
            DotBracket::Open(b) => b.open(),
            DotBracket::Close(b) => b.close(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DotBracketVec(pub Vec<DotBracket>);

impl Deref for DotBracketVec {
    type Target = [DotBracket];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<&str> for DotBracketVec {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut vec = Vec::with_capacity(s.len());
        for (i, c) in s.chars().enumerate() {
            match DotBracket::try_from(c) {
                Ok(db) => vec.push(db),
                Err(StructureError::InvalidToken(tok, src, _)) => {
                    return Err(StructureError::InvalidToken(tok, src, i));
                }
                Err(e) => return Err(e),
            }
        }
        Ok(DotBracketVec(vec))
    }
}

impl DotBracketVec {
    /// Keeps only dot-bracket symbols, anything else (whitespace, line
    /// breaks, sequence letters, ...) is silently stripped.
    pub fn from_lossy(s: &str) -> Self {
        DotBracketVec(s.chars()
            .filter_map(|c| DotBracket::try_from(c).ok())
            .collect())
    }

    /// Number of bracket symbols, i.e. twice the number of pairs of a
    /// balanced structure.
    pub fn num_brackets(&self) -> usize {
        self.iter().filter(|db| db.is_bracket()).count()
    }

    /// The bracket kinds occurring in this structure, in canonical order.
    pub fn bracket_kinds(&self) -> Vec<Bracket> {
        let mut seen = [false; BRACKET_KINDS];
        for db in self.iter() {
            if let DotBracket::Open(b) | DotBracket::Close(b) = db {
                seen[*b as usize] = true;
            }
        }
        Bracket::ALL.into_iter().filter(|b| seen[*b as usize]).collect()
    }

    /// Anything beyond round brackets encodes a pseudoknot.
    pub fn has_pseudoknots(&self) -> bool {
        self.bracket_kinds().iter().any(|b| *b != Bracket::Round)
    }

    pub fn pair_list(&self) -> Result<PairList, StructureError> {
        PairList::try_from(self)
    }
}

impl fmt::Display for DotBracketVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for db in &self.0 {
            write!(f, "{}", char::from(*db))?;
        }
        Ok(())
    }
}
