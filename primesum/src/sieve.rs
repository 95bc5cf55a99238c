use crate::PrimalityTable;

/// The outcome of sieving the integers below a bound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sieve {
    table: PrimalityTable,
}

impl Sieve {
    /// Allocate a fresh [PrimalityTable] for `bound` and sieve it
    pub fn run(bound: usize) -> Self {
        let mut table = PrimalityTable::new(bound);
        table.sieve();
        let sieve = Self { table };
        log::debug!(
            target: "primesum:sieve",
            bound = bound,
            count = sieve.count();
            "sieved {bound} integers"
        );
        sieve
    }

    /// The exclusive upper bound that was sieved
    #[inline]
    pub fn bound(&self) -> usize {
        self.table.len()
    }

    /// The primes below the bound, in ascending order
    pub fn primes(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.table.primes()
    }

    /// The number of primes below the bound
    pub fn count(&self) -> usize {
        self.table.primes().count()
    }

    /// The sum of the primes below the bound
    pub fn sum(&self) -> u64 {
        self.table.sum()
    }

    #[inline]
    pub fn table(&self) -> &PrimalityTable {
        &self.table
    }
}

/// Returns the sum of all primes strictly less than `bound`.
///
/// Any `bound <= 2` yields 0.
pub fn sum_of_primes(bound: usize) -> u64 {
    Sieve::run(bound).sum()
}

/// Returns every prime strictly less than `bound`, in ascending order
pub fn primes_below(bound: usize) -> Vec<usize> {
    Sieve::run(bound).primes().collect()
}
