use std::path::Path;

use serde::Deserialize;

use crate::Error;

/// Settings for a single prime-sum run.
///
/// Every field may be omitted from a config file, in which case the default applies:
///
/// ```toml
/// bound = 100
/// greeting = "Hello, World!"
/// max_bound = 100000000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Exclusive upper bound on the primes to sum
    pub bound: usize,
    /// The line printed before the summary
    pub greeting: String,
    /// The largest bound accepted, which caps the size of the primality table
    pub max_bound: usize,
}

impl Config {
    pub const DEFAULT_BOUND: usize = 100;
    pub const DEFAULT_GREETING: &'static str = "Hello, World!";
    pub const DEFAULT_MAX_BOUND: usize = 100_000_000;

    pub fn from_toml_str(source: &str) -> Result<Self, Error> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse the TOML file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        log::debug!(target: "primesum:config", "loading config from '{}'", path.display());
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&source).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.bound > self.max_bound {
            return Err(Error::BoundTooLarge {
                bound: self.bound,
                limit: self.max_bound,
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bound: Self::DEFAULT_BOUND,
            greeting: Self::DEFAULT_GREETING.to_string(),
            max_bound: Self::DEFAULT_MAX_BOUND,
        }
    }
}
