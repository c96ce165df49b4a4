use std::fmt;

use crate::RESNUM;

#[derive(Debug, PartialEq, Eq)]
pub enum StructureError {
    UnmatchedOpen(char, Vec<usize>), // brackets at these positions were never closed
    UnmatchedClose(char, usize),     // closing bracket at this position has no partner
    InvalidToken(String, String, usize), // invalid token, source and position
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::UnmatchedOpen(c, pos) => {
                let pos: Vec<String> = pos.iter().map(|p| p.to_string()).collect();
                write!(f, "Unmatched '{}' at position(s) {}", c, pos.join(", "))
            }
            StructureError::UnmatchedClose(c, i) => {
                write!(f, "Unmatched '{}' at position {}", c, i)
            }
            StructureError::InvalidToken(tok, src, i) => {
                write!(f, "Invalid {} in {} at position {}", tok, src, i)
            }
        }
    }
}

impl StructureError {
    /// Same message as `Display`, with 0-based structure positions
    /// translated into residue numbers starting at `start`.
    pub fn residue_message(&self, start: RESNUM) -> String {
        let resnum = |i: &usize| start + *i as RESNUM;
        match self {
            StructureError::UnmatchedOpen(c, pos) => {
                let res: Vec<String> = pos.iter().map(|p| resnum(p).to_string()).collect();
                format!("Unmatched '{}' at residue(s) {}", c, res.join(", "))
            }
            StructureError::UnmatchedClose(c, i) => {
                format!("Unmatched '{}' at residue {}", c, resnum(i))
            }
            StructureError::InvalidToken(tok, src, i) => {
                format!("Invalid {} in {} at residue {}", tok, src, resnum(i))
            }
        }
    }
}

impl std::error::Error for StructureError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residue_message() {
        let err = StructureError::UnmatchedOpen('(', vec![0]);
        assert_eq!(err.residue_message(1), "Unmatched '(' at residue(s) 1");
        assert_eq!(format!("{}", err), "Unmatched '(' at position(s) 0");

        let err = StructureError::UnmatchedOpen('[', vec![3, 7]);
        assert_eq!(err.residue_message(-2), "Unmatched '[' at residue(s) 1, 5");

        let err = StructureError::UnmatchedClose(')', 2);
        assert_eq!(err.residue_message(10), "Unmatched ')' at residue 12");
    }
}
