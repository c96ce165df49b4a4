use std::fmt;
use std::ops::Deref;


#[derive(Debug, PartialEq, Eq)]
pub enum SequenceError {
    InvalidChar(char),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::InvalidChar(c) => {
                write!(f, "Unsupported nucleotide: '{}'", c)
            }
        }
    }
}

impl std::error::Error for SequenceError {}


#[derive(Clone, Hash, Copy, Debug, Eq, PartialEq)]
pub enum Base { A, C, G, U }
pub const BCOUNT: usize = 4; // 4 Base variants for tables.

impl TryFrom<char> for Base {
    type Error = SequenceError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'U' | 'T' => Ok(Base::U),
            _ => Err(SequenceError::InvalidChar(c)),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
        };
        write!(f, "{}", c)
    }
}


#[derive(Clone, Hash, Debug, Eq, PartialEq, Default)]
pub struct NucleotideVec(pub Vec<Base>);

impl Deref for NucleotideVec {
    type Target = [Base];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<&str> for NucleotideVec {
    type Error = SequenceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut vec = Vec::with_capacity(s.len());
        for c in s.chars() {
            vec.push(Base::try_from(c)?);
        }
        Ok(NucleotideVec(vec))
    }
}

impl fmt::Display for NucleotideVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.0 {
            write!(f, "{}", base)?;
        }
        Ok(())
    }
}

impl NucleotideVec {
    /// Keeps every valid nucleotide and drops all other symbols. Returns the
    /// sequence together with the number of dropped non-whitespace symbols.
    pub fn from_lossy(s: &str) -> (Self, usize) {
        let mut dropped = 0;
        let vec = s.chars()
            .filter(|c| !c.is_whitespace())
            .filter_map(|c| match Base::try_from(c) {
                Ok(b) => Some(b),
                Err(_) => {
                    dropped += 1;
                    None
                }
            })
            .collect();
        (NucleotideVec(vec), dropped)
    }

    /// Appends the valid nucleotides of `s`, see [`NucleotideVec::from_lossy`].
    pub fn extend_lossy(&mut self, s: &str) -> usize {
        let (more, dropped) = NucleotideVec::from_lossy(s);
        self.0.extend(more.0);
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_char() {
        assert_eq!(Base::try_from('a').unwrap(), Base::A);
        assert_eq!(Base::try_from('G').unwrap(), Base::G);
        assert_eq!(Base::try_from('T').unwrap(), Base::U);
        assert_eq!(Base::try_from('t').unwrap(), Base::U);
        assert_eq!(Base::try_from('N').unwrap_err(), SequenceError::InvalidChar('N'));
    }

    #[test]
    fn test_nucleotide_vec_strict() {
        let seq = NucleotideVec::try_from("acgt").unwrap();
        assert_eq!(seq.to_string(), "ACGU");
        assert!(NucleotideVec::try_from("AC-GU").is_err());
    }

    #[test]
    fn test_nucleotide_vec_from_lossy() {
        let (seq, dropped) = NucleotideVec::from_lossy("GG NA-ct\n");
        assert_eq!(seq.to_string(), "GGACU");
        assert_eq!(dropped, 2);
    }

    #[test]
    fn test_nucleotide_vec_extend_lossy() {
        let mut seq = NucleotideVec::default();
        assert_eq!(seq.extend_lossy("GGGA"), 0);
        assert_eq!(seq.extend_lossy("AAC*"), 1);
        assert_eq!(seq.len(), 7);
        assert_eq!(seq.to_string(), "GGGAAAC");
    }
}
