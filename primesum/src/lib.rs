//! Sums the primes below a bound using the Sieve of Eratosthenes.
//!
//! ```
//! assert_eq!(primesum::sum_of_primes(10), 2 + 3 + 5 + 7);
//!
//! let sieve = primesum::Sieve::run(100);
//! assert_eq!(
//!     primesum::Summary::new(&sieve).to_string(),
//!     "2 + 3 + 5 + 7 + 11 + ... + 83 + 89 + 97 == 1060"
//! );
//! ```
//!
//! Library code logs under the `primesum:sieve` and `primesum:config` targets.

mod config;
mod error;
mod sieve;
mod summary;
mod table;

pub use self::{
    config::Config,
    error::Error,
    sieve::{Sieve, primes_below, sum_of_primes},
    summary::Summary,
    table::PrimalityTable,
};
