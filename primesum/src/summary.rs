use core::fmt;

use crate::Sieve;

const LEADING: usize = 5;
const TRAILING: usize = 3;

/// An abbreviated rendering of a prime sum, e.g. `2 + 3 + 5 + 7 + 11 + ... + 83 + 89 + 97 == 1060`
///
/// Up to eight primes are listed in full. Beyond that, only the first five and the last three are
/// shown, separated by `...`. With no primes at all, the line reads `0 == 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    leading: Vec<usize>,
    trailing: Vec<usize>,
    count: usize,
    sum: u64,
}

impl Summary {
    pub fn new(sieve: &Sieve) -> Self {
        let count = sieve.count();
        let leading = sieve.primes().take(LEADING).collect();
        let trailing = if count > LEADING + TRAILING {
            let mut tail = sieve.primes().rev().take(TRAILING).collect::<Vec<_>>();
            tail.reverse();
            tail
        } else {
            sieve.primes().skip(LEADING).collect()
        };
        Self {
            leading,
            trailing,
            count,
            sum: sieve.sum(),
        }
    }

    /// The number of primes being summed
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn sum(&self) -> u64 {
        self.sum
    }

    fn is_elided(&self) -> bool {
        self.count > self.leading.len() + self.trailing.len()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 0 {
            return write!(f, "0 == {}", self.sum);
        }

        let mut terms = self.leading.iter().map(|p| p.to_string()).collect::<Vec<_>>();
        if self.is_elided() {
            terms.push("...".to_string());
        }
        terms.extend(self.trailing.iter().map(|p| p.to_string()));
        write!(f, "{} == {}", terms.join(" + "), self.sum)
    }
}
