//! Seed pairs and the sequences they generate.

use crate::error::{Error, Result};
use crate::recurrence::{advance, ratio_at, term_at};
use crate::PHI;

/// The two initial values `(f0, f1)` that fix a generalized Fibonacci
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeedPair {
    /// First term `x_0`
    pub f0: f64,
    /// Second term `x_1`
    pub f1: f64,
}

impl SeedPair {
    /// The classic Fibonacci-like seed `(1, 1)`.
    pub const CLASSIC: Self = Self { f0: 1.0, f1: 1.0 };

    /// Create a seed pair. Both values must be finite.
    pub fn new(f0: f64, f1: f64) -> Result<Self> {
        if !f0.is_finite() {
            return Err(Error::invalid("f0", format!("must be finite, got {f0}")));
        }
        if !f1.is_finite() {
            return Err(Error::invalid("f1", format!("must be finite, got {f1}")));
        }
        Ok(Self { f0, f1 })
    }

    /// The seed `(f0, -f0/phi)` on the conjugate axis.
    ///
    /// Sequences started here are `f0 * psi^n` and their ratio tends to
    /// `psi = -1/phi` instead of `phi`.
    pub fn on_conjugate_axis(f0: f64) -> Result<Self> {
        Self::new(f0, -f0 / PHI)
    }

    /// Term `x_n`.
    pub fn term(&self, n: u64) -> f64 {
        term_at(n, self.f0, self.f1)
    }

    /// Ratio `x_n / x_{n-1}`. Requires `n >= 1`.
    pub fn convergence_ratio(&self, n: u64) -> Result<f64> {
        if n == 0 {
            return Err(Error::invalid("n", "must be at least 1, got 0"));
        }
        ratio_at(n, self.f0, self.f1)
    }

    /// Seed pair shifted `steps` positions down the sequence.
    ///
    /// `seed.shifted(k).term(n) == seed.term(n + k)`.
    pub fn shifted(&self, steps: u64) -> Self {
        let (f0, f1) = advance(self.f0, self.f1, steps);
        Self { f0, f1 }
    }

    /// Infinite iterator over `x_0, x_1, x_2, ...`.
    pub fn terms(&self) -> Terms {
        Terms {
            prev: self.f0,
            curr: self.f1,
        }
    }

    /// Iterator over the ratios `x_1/x_0, x_2/x_1, ...`.
    ///
    /// Each item is the same value [`SeedPair::convergence_ratio`] returns
    /// for that index, including the division-by-zero failures.
    pub fn ratios(&self) -> Ratios {
        Ratios {
            seed: *self,
            terms: self.terms(),
            index: 0,
        }
    }
}

impl TryFrom<(f64, f64)> for SeedPair {
    type Error = Error;

    fn try_from((f0, f1): (f64, f64)) -> Result<Self> {
        Self::new(f0, f1)
    }
}

impl From<SeedPair> for (f64, f64) {
    fn from(seed: SeedPair) -> Self {
        (seed.f0, seed.f1)
    }
}

impl std::fmt::Display for SeedPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.f0, self.f1)
    }
}

/// Iterator over the terms of a sequence.
#[derive(Debug, Clone)]
pub struct Terms {
    prev: f64,
    curr: f64,
}

impl Iterator for Terms {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.prev;
        let next = self.prev + self.curr;
        self.prev = self.curr;
        self.curr = next;
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Iterator over consecutive-term ratios of a sequence.
#[derive(Debug, Clone)]
pub struct Ratios {
    seed: SeedPair,
    terms: Terms,
    index: u64,
}

impl Iterator for Ratios {
    type Item = Result<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        let denominator = self.terms.next()?;
        let numerator = self.terms.prev;
        self.index += 1;
        if denominator == 0.0 {
            return Some(Err(Error::DivisionByZero {
                denominator_index: self.index - 1,
                f0: self.seed.f0,
                f1: self.seed.f1,
            }));
        }
        Some(Ok(numerator / denominator))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
