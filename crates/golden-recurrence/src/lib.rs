//! Golden Recurrence
//!
//! Generalized Fibonacci sequences `x_k = x_{k-1} + x_{k-2}` started from an
//! arbitrary real seed pair `(f0, f1)`, and the ratio of consecutive terms
//! as an estimate of the sequence's growth rate.
//!
//! # Mathematical Foundation
//!
//! The characteristic equation `x^2 = x + 1` has roots
//! `phi = (1 + sqrt 5) / 2` and `psi = (1 - sqrt 5) / 2 = -1/phi`, so every
//! sequence is
//!
//! ```text
//! x_n = A * phi^n + B * psi^n
//! A = (f1 - psi * f0) / sqrt 5
//! B = (phi * f0 - f1) / sqrt 5
//! ```
//!
//! Because `|psi| < 1 < phi`, the ratio `x_n / x_{n-1}` tends to `phi`
//! whenever `A != 0`. `A` vanishes exactly on the conjugate axis
//! `f1 = -f0 / phi`; there `x_n = f0 * psi^n` and the ratio tends to
//! `psi`, whose magnitude is `1/phi = phi - 1`.
//!
//! In floating point the conjugate axis is unstable. Rounding leaves a tiny
//! golden component that grows by `phi^2` per step relative to the conjugate
//! one, so a seed only close to the axis follows `psi` for a while and then
//! turns toward `phi`.
//!
//! # Operations
//!
//! - [`term`]: the `n`-th term, O(n) time and O(1) space
//! - [`convergence_ratio`]: `term(n) / term(n - 1)`
//! - [`TermCache`]: optional write-once memoization of both
//! - [`Sweep`]: classify many seeds without aborting on undefined ratios

mod cache;
mod error;
mod limit;
mod recurrence;
mod seed;
mod sweep;

pub use cache::TermCache;
pub use error::{Error, Result};
pub use limit::{classify, Limit};
pub use recurrence::{convergence_ratio, term};
pub use seed::{Ratios, SeedPair, Terms};
pub use sweep::{
    conjugate_axis_seeds, grid_seeds, Convergence, Sample, Sweep, SweepConfig, SweepReport,
    SweepSummary,
};

/// The golden ratio `(1 + sqrt 5) / 2`, dominant root of `x^2 = x + 1`.
pub const PHI: f64 = 1.618_033_988_749_895;

/// `1 / phi = phi - 1`.
pub const PHI_INVERSE: f64 = 0.618_033_988_749_894_9;

/// The conjugate root `(1 - sqrt 5) / 2 = -1/phi`.
pub const PSI: f64 = -PHI_INVERSE;
