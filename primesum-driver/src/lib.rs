use std::{ffi::OsString, io::Write, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use primesum::{Config, Sieve, Summary};

/// This struct provides the command-line interface used by `primesum`
#[derive(Debug, Parser)]
#[command(name = "primesum")]
#[command(version, about = "Sum the primes below a bound", long_about = None)]
pub struct Driver {
    /// Exclusive upper bound on the primes to sum
    ///
    /// Overrides the `bound` set in the config file, if any. Falls back to `PRIMESUM_BOUND`.
    #[arg(short, long, value_name = "N")]
    bound: Option<usize>,
    /// Path to a TOML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// The line printed before the sum
    #[arg(long, value_name = "TEXT", conflicts_with = "no_greeting")]
    greeting: Option<String>,
    /// Do not print the greeting line
    #[arg(long)]
    no_greeting: bool,
    /// Print each prime on its own line before the sum
    #[arg(long)]
    primes: bool,
}

impl Driver {
    /// The environment variable consulted when `--bound` is not given
    pub const BOUND_ENV: &'static str = "PRIMESUM_BOUND";

    /// Parse `args`, consulting [Self::BOUND_ENV] in the process environment, and write the
    /// report to `out`
    pub fn run<A, W>(args: A, out: &mut W) -> anyhow::Result<()>
    where
        A: IntoIterator,
        A::Item: Into<OsString> + Clone,
        W: Write,
    {
        Self::run_with_env(args, std::env::var_os(Self::BOUND_ENV), out)
    }

    /// Like [Self::run], but takes the value of [Self::BOUND_ENV] explicitly
    pub fn run_with_env<A, W>(
        args: A,
        bound_env: Option<OsString>,
        out: &mut W,
    ) -> anyhow::Result<()>
    where
        A: IntoIterator,
        A::Item: Into<OsString> + Clone,
        W: Write,
    {
        let mut driver = Self::try_parse_from(args)?;
        if driver.bound.is_none()
            && let Some(value) = bound_env
        {
            let bound = value
                .to_str()
                .and_then(|value| value.parse::<usize>().ok())
                .with_context(|| {
                    format!("invalid value {value:?} for {}: expected an integer", Self::BOUND_ENV)
                })?;
            driver.bound = Some(bound);
        }
        driver.execute(out)
    }

    /// Resolve the effective [Config]: defaults, then the config file, then flags
    pub fn config(&self) -> anyhow::Result<Config> {
        let mut config = match self.config.as_deref() {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(bound) = self.bound {
            config.bound = bound;
        }
        if let Some(greeting) = self.greeting.as_ref() {
            config.greeting.clone_from(greeting);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn execute<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let config = self.config()?;
        log::debug!(target: "primesum:driver", "running with {config:?}");

        if !self.no_greeting {
            writeln!(out, "{}", config.greeting).context("failed to write greeting")?;
        }

        let sieve = Sieve::run(config.bound);
        if self.primes {
            for prime in sieve.primes() {
                writeln!(out, "{prime}").context("failed to write prime")?;
            }
        }
        writeln!(out, "{}", Summary::new(&sieve)).context("failed to write summary")?;
        out.flush().context("failed to flush output")
    }
}
