use core::fmt;

/// A table of primality flags for the integers `0..bound`.
///
/// A set flag means the index has not yet been proven composite. Flags are only ever cleared, so
/// once [PrimalityTable::sieve] has run, the set flags at indices `>= 2` are exactly the primes
/// below the bound. Indices 0 and 1 keep their initial flag, but are never reported as prime.
#[derive(Clone, PartialEq, Eq)]
pub struct PrimalityTable {
    flags: Vec<bool>,
}

impl PrimalityTable {
    /// Allocate a table of `bound` flags, all of them set
    pub fn new(bound: usize) -> Self {
        Self {
            flags: vec![true; bound],
        }
    }

    /// The exclusive upper bound this table covers
    #[inline]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Returns true if `index` has not been proven composite.
    ///
    /// Out-of-range indices are never candidates.
    #[inline]
    pub fn is_candidate(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Clear the flag for `index`. Out-of-range indices are ignored.
    #[inline]
    pub fn mark_composite(&mut self, index: usize) {
        if let Some(flag) = self.flags.get_mut(index) {
            *flag = false;
        }
    }

    /// Eliminate every composite index in the table.
    ///
    /// Every composite `c < bound` has a prime factor `p` with `p * p <= c`, so it is cleared when
    /// its smallest prime factor is visited, and visiting stops once `p * p` reaches the bound.
    pub fn sieve(&mut self) {
        let bound = self.len();
        let mut p = 2usize;
        while let Some(square) = p.checked_mul(p)
            && square < bound
        {
            if self.is_candidate(p) {
                log::trace!(target: "primesum:sieve", "eliminating multiples of {p}");
                for composite in (square..bound).step_by(p) {
                    self.mark_composite(composite);
                }
            }
            p += 1;
        }
    }

    /// Iterate over the indices in `[2, bound)` whose flag is still set, in ascending order
    pub fn primes(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .skip(2)
            .filter_map(|(index, &flag)| flag.then_some(index))
    }

    /// Sum the indices in `[2, bound)` whose flag is still set
    pub fn sum(&self) -> u64 {
        self.primes().map(|p| p as u64).sum()
    }
}

impl fmt::Debug for PrimalityTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimalityTable")
            .field("len", &self.len())
            .field("candidates", &self.primes().count())
            .finish()
    }
}
