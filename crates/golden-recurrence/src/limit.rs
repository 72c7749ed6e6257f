//! Classification of a convergence ratio against the two roots of
//! `x^2 = x + 1`.

use crate::{PHI, PSI};

/// Which root a ratio has settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Limit {
    /// Within tolerance of `phi`. Almost every seed ends here.
    Golden,
    /// Within tolerance of `psi = -1/phi`. Only seeds on the conjugate axis.
    Conjugate,
    /// Neither root yet: too few iterations, or a non-finite ratio.
    Undetermined,
}

/// Classify `ratio` as [`Limit::Golden`], [`Limit::Conjugate`] or neither.
pub fn classify(ratio: f64, tolerance: f64) -> Limit {
    if (ratio - PHI).abs() <= tolerance {
        Limit::Golden
    } else if (ratio - PSI).abs() <= tolerance {
        Limit::Conjugate
    } else {
        Limit::Undetermined
    }
}

impl Limit {
    /// The root this limit names, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            Limit::Golden => Some(PHI),
            Limit::Conjugate => Some(PSI),
            Limit::Undetermined => None,
        }
    }
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Limit::Golden => write!(f, "golden"),
            Limit::Conjugate => write!(f, "conjugate"),
            Limit::Undetermined => write!(f, "undetermined"),
        }
    }
}
