//! Convergence sweeps over many seed pairs.
//!
//! A sweep evaluates the convergence ratio at a fixed index for each seed
//! and classifies it. A seed whose ratio is undefined (zero denominator)
//! is recorded as a failed sample; the remaining seeds are still evaluated.

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::limit::{classify, Limit};
use crate::seed::SeedPair;

/// Configuration for a sweep.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SweepConfig {
    /// Index `n` at which each ratio `x_n / x_{n-1}` is taken
    pub iterations: u64,
    /// Maximum distance from a root for a ratio to count as converged
    pub tolerance: f64,
    /// Lower bound of both grid axes
    pub grid_min: f64,
    /// Upper bound of both grid axes
    pub grid_max: f64,
    /// Points per grid axis
    pub grid_steps: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            iterations: 30,
            tolerance: 1e-3,
            grid_min: -10.0,
            grid_max: 10.0,
            grid_steps: 21,
        }
    }
}

impl SweepConfig {
    /// Create config from environment variables, using defaults for any
    /// that are unset.
    ///
    /// - `GOLDEN_ITERATIONS`
    /// - `GOLDEN_TOLERANCE`
    /// - `GOLDEN_GRID_MIN`
    /// - `GOLDEN_GRID_MAX`
    /// - `GOLDEN_GRID_STEPS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`SweepConfig::from_env`] but reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            iterations: parse_var(&lookup, "GOLDEN_ITERATIONS", defaults.iterations)?,
            tolerance: parse_var(&lookup, "GOLDEN_TOLERANCE", defaults.tolerance)?,
            grid_min: parse_var(&lookup, "GOLDEN_GRID_MIN", defaults.grid_min)?,
            grid_max: parse_var(&lookup, "GOLDEN_GRID_MAX", defaults.grid_max)?,
            grid_steps: parse_var(&lookup, "GOLDEN_GRID_STEPS", defaults.grid_steps)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a runnable sweep.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::invalid("iterations", "must be at least 1"));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(Error::invalid(
                "tolerance",
                format!("must be finite and positive, got {}", self.tolerance),
            ));
        }
        if !(self.grid_min.is_finite() && self.grid_max.is_finite()) {
            return Err(Error::invalid("grid", "bounds must be finite"));
        }
        if self.grid_min > self.grid_max {
            return Err(Error::invalid(
                "grid",
                format!("min {} exceeds max {}", self.grid_min, self.grid_max),
            ));
        }
        if self.grid_steps == 0 {
            return Err(Error::invalid("grid_steps", "must be at least 1"));
        }
        Ok(())
    }

    /// The Cartesian grid of seeds this configuration describes.
    pub fn grid(&self) -> Result<Vec<SeedPair>> {
        grid_seeds(self.grid_min, self.grid_max, self.grid_steps)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| Error::invalid(key, format!("cannot parse {raw:?}"))),
    }
}

/// Where a successful sample's ratio ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Convergence {
    /// `x_n / x_{n-1}`
    pub ratio: f64,
    /// Root the ratio is within tolerance of
    pub limit: Limit,
}

/// One evaluated seed.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub seed: SeedPair,
    pub outcome: Result<Convergence>,
}

/// Per-limit counts over a sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepSummary {
    pub golden: usize,
    pub conjugate: usize,
    pub undetermined: usize,
    pub failed: usize,
}

impl SweepSummary {
    /// Total samples counted.
    pub fn total(&self) -> usize {
        self.golden + self.conjugate + self.undetermined + self.failed
    }

    fn record(&mut self, outcome: &Result<Convergence>) {
        match outcome {
            Ok(c) => match c.limit {
                Limit::Golden => self.golden += 1,
                Limit::Conjugate => self.conjugate += 1,
                Limit::Undetermined => self.undetermined += 1,
            },
            Err(_) => self.failed += 1,
        }
    }
}

/// Result of running a sweep.
#[derive(Debug, Clone, Default)]
pub struct SweepReport {
    pub samples: Vec<Sample>,
    pub summary: SweepSummary,
}

/// Runs convergence sweeps with a fixed configuration.
#[derive(Debug, Clone)]
pub struct Sweep {
    config: SweepConfig,
}

impl Sweep {
    /// Create a sweep, validating the configuration.
    pub fn new(config: SweepConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Evaluate a single seed.
    pub fn sample(&self, seed: SeedPair) -> Sample {
        let outcome = seed
            .convergence_ratio(self.config.iterations)
            .map(|ratio| Convergence {
                ratio,
                limit: classify(ratio, self.config.tolerance),
            });

        match &outcome {
            Ok(c) => debug!(%seed, ratio = c.ratio, limit = %c.limit, "sample converged"),
            Err(e) => warn!(%seed, error = %e, "sample skipped"),
        }

        Sample { seed, outcome }
    }

    /// Evaluate every seed, in order.
    pub fn run(&self, seeds: impl IntoIterator<Item = SeedPair>) -> SweepReport {
        let mut report = SweepReport::default();
        for seed in seeds {
            let sample = self.sample(seed);
            report.summary.record(&sample.outcome);
            report.samples.push(sample);
        }
        debug!(
            total = report.summary.total(),
            failed = report.summary.failed,
            "sweep complete"
        );
        report
    }
}

/// Seeds on an evenly spaced `steps x steps` grid over `[min, max]^2`,
/// row-major in `f0`.
///
/// With `steps == 1` the grid is the single point `(min, min)`.
pub fn grid_seeds(min: f64, max: f64, steps: usize) -> Result<Vec<SeedPair>> {
    if steps == 0 {
        return Err(Error::invalid("steps", "must be at least 1"));
    }
    if !(min.is_finite() && max.is_finite()) || min > max {
        return Err(Error::invalid("range", format!("[{min}, {max}] is not a finite interval")));
    }

    let axis: Vec<f64> = if steps == 1 {
        vec![min]
    } else {
        let width = max - min;
        let last = (steps - 1) as f64;
        (0..steps).map(|i| min + width * (i as f64) / last).collect()
    };

    let mut seeds = Vec::with_capacity(steps * steps);
    for &f0 in &axis {
        for &f1 in &axis {
            seeds.push(SeedPair { f0, f1 });
        }
    }
    Ok(seeds)
}

/// Seeds `(f0, -f0/phi)` for each `f0`, skipping zero and non-finite values.
pub fn conjugate_axis_seeds(f0s: impl IntoIterator<Item = f64>) -> Vec<SeedPair> {
    f0s.into_iter()
        .filter(|&f0| f0 != 0.0)
        .filter_map(|f0| SeedPair::on_conjugate_axis(f0).ok())
        .collect()
}
