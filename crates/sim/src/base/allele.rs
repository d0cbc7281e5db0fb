use core::fmt;

use crate::errors::InvalidAllele;
use serde::{Deserialize, Serialize};

/// A single binary site of a genome.
///
/// `Allele` is a compact, Copyable representation backed by a single byte.
/// The mapping of variants to integers is stable (Mutant=0, Wildtype=1) and
/// matches the textual bit-string form used by `Genome`'s `Display`/`FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Allele {
    Mutant = 0,
    Wildtype = 1,
}

impl Allele {
    /// Convert from u8 index (0-1)
    #[inline(always)]
    pub const fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Self::Mutant),
            1 => Some(Self::Wildtype),
            _ => None,
        }
    }

    /// Convert to the compact u8 index (0-1).
    #[inline(always)]
    pub const fn to_index(self) -> u8 {
        self as u8
    }

    /// Convert to the `'0'`/`'1'` character used in bit strings.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        match self {
            Self::Mutant => '0',
            Self::Wildtype => '1',
        }
    }

    /// Return the opposite symbol (symmetric flip, 1 <-> 0).
    #[inline(always)]
    pub const fn flip(self) -> Self {
        match self {
            Self::Mutant => Self::Wildtype,
            Self::Wildtype => Self::Mutant,
        }
    }

    #[inline(always)]
    pub const fn is_wildtype(self) -> bool {
        matches!(self, Self::Wildtype)
    }
}

impl TryFrom<char> for Allele {
    type Error = InvalidAllele;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(Self::Mutant),
            '1' => Ok(Self::Wildtype),
            other => Err(InvalidAllele(other)),
        }
    }
}

impl TryFrom<u8> for Allele {
    type Error = InvalidAllele;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_index(byte).ok_or(InvalidAllele(byte as char))
    }
}

impl From<Allele> for u8 {
    #[inline(always)]
    fn from(allele: Allele) -> u8 {
        allele.to_index()
    }
}

impl From<Allele> for char {
    #[inline(always)]
    fn from(allele: Allele) -> char {
        allele.to_char()
    }
}

impl fmt::Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
