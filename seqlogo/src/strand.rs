//! The strand a motif is reported on.

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use super::abc::ComplementableAlphabet;

/// An error related to the parsing of a strand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrandError(String);

impl Display for ParseStrandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse strand error: {:?} is not a valid strand", self.0)
    }
}

impl std::error::Error for ParseStrandError {}

/// The strand of a motif occurence.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Strand {
    /// The positive strand (`+`).
    #[default]
    Positive,
    /// The negative strand (`-`), drawn as the reverse complement.
    Negative,
}

impl Strand {
    /// Get the symbol drawn for the given matrix column on this strand.
    #[inline]
    pub fn symbol<A: ComplementableAlphabet>(&self, column: A::Symbol) -> A::Symbol {
        match self {
            Strand::Positive => column,
            Strand::Negative => A::complement(column),
        }
    }
}

impl FromStr for Strand {
    type Err = ParseStrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Positive),
            "-" => Ok(Self::Negative),
            other => Err(ParseStrandError(other.to_string())),
        }
    }
}

impl TryFrom<char> for Strand {
    type Error = ParseStrandError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Self::Positive),
            '-' => Ok(Self::Negative),
            other => Err(ParseStrandError(other.to_string())),
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Strand::Positive => f.write_str("+"),
            Strand::Negative => f.write_str("-"),
        }
    }
}
