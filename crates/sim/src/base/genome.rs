use super::Allele;
use crate::errors::InvalidGenome;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Immutable binary genome backed by shared storage.
///
/// A `Genome` never changes after construction: mutation produces a new
/// genome (see `MutationModel::mutate`). The sites live in an `Arc<[Allele]>`,
/// so cloning a parent genome for an offspring that did not mutate is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Genome(Arc<[Allele]>);

impl Genome {
    /// Create the reference genome of `len` sites, all `Wildtype`.
    ///
    /// ```rust
    /// # use quasievo_sim::base::Genome;
    /// let wt = Genome::wildtype(4);
    /// assert_eq!(wt.to_string(), "1111");
    /// assert_eq!(wt.hamming_distance(), 0);
    /// ```
    pub fn wildtype(len: usize) -> Self {
        Self(vec![Allele::Wildtype; len].into())
    }

    /// Create a genome from a vector of alleles.
    pub fn from_alleles(alleles: Vec<Allele>) -> Self {
        Self(alleles.into())
    }

    /// Return the number of sites.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the allele at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Allele> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Allele> + '_ {
        self.0.iter().copied()
    }

    /// Number of sites that differ from the wildtype (count of `Mutant`).
    pub fn hamming_distance(&self) -> usize {
        self.0.iter().filter(|a| !a.is_wildtype()).count()
    }

    /// True when every site carries the wildtype symbol.
    pub fn is_wildtype(&self) -> bool {
        self.0.iter().all(|a| a.is_wildtype())
    }

    /// True when both genomes share the same backing storage.
    pub fn shares_storage(&self, other: &Genome) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl FromIterator<Allele> for Genome {
    fn from_iter<I: IntoIterator<Item = Allele>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for Genome {
    type Err = InvalidGenome;

    /// Parse a bit string such as `"110101"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidGenome::Empty);
        }
        s.chars()
            .enumerate()
            .map(|(position, symbol)| {
                Allele::try_from(symbol)
                    .map_err(|_| InvalidGenome::InvalidSymbol { position, symbol })
            })
            .collect()
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.0.iter().map(|a| a.to_char()).collect();
        f.write_str(&s)
    }
}
