//! The generalized Fibonacci recurrence `x_k = x_{k-1} + x_{k-2}`.
//!
//! Every value is produced by the same two-variable update
//!
//! ```text
//! prev, curr <- curr, prev + curr
//! ```
//!
//! applied `n` times to `(f0, f1)`, so a term and the ratio built from it
//! run in O(n) time and O(1) space. No branch depends on the seed values:
//! the exceptional seeds on the conjugate axis go through exactly the same
//! arithmetic as every other seed.

use crate::error::{Error, Result};

/// Apply the update `steps` times, returning `(x_steps, x_{steps+1})`.
#[inline]
pub(crate) fn advance(f0: f64, f1: f64, steps: u64) -> (f64, f64) {
    let mut prev = f0;
    let mut curr = f1;
    for _ in 0..steps {
        let next = prev + curr;
        prev = curr;
        curr = next;
    }
    (prev, curr)
}

/// Term `x_n` for a non-negative index.
#[inline]
pub(crate) fn term_at(n: u64, f0: f64, f1: f64) -> f64 {
    advance(f0, f1, n).0
}

/// `x_n / x_{n-1}` for `n >= 1`.
///
/// Both terms come out of a single pass. The pass that ends on
/// `(x_{n-1}, x_n)` performs the same additions as two separate calls to
/// [`term_at`], so the quotient is bit-identical to
/// `term_at(n) / term_at(n - 1)`.
pub(crate) fn ratio_at(n: u64, f0: f64, f1: f64) -> Result<f64> {
    debug_assert!(n >= 1);
    let (denominator, numerator) = advance(f0, f1, n - 1);
    if denominator == 0.0 {
        return Err(Error::DivisionByZero {
            denominator_index: n - 1,
            f0,
            f1,
        });
    }
    Ok(numerator / denominator)
}

/// Convert a caller-supplied signed index, rejecting anything below `min`.
pub(crate) fn checked_index(n: i64, min: u64) -> Result<u64> {
    match u64::try_from(n) {
        Ok(n) if n >= min => Ok(n),
        _ => Err(Error::invalid(
            "n",
            format!("must be at least {min}, got {n}"),
        )),
    }
}

/// The `n`-th term of the recurrence seeded with `(f0, f1)`.
///
/// `term(0, f0, f1) == f0` and `term(1, f0, f1) == f1` exactly. A negative
/// `n` fails with [`Error::InvalidArgument`].
///
/// Overflow is not clamped: large `n` with large seeds simply yields an
/// infinite (or NaN) value under IEEE-754 rules.
///
/// ```
/// use golden_recurrence::term;
///
/// assert_eq!(term(10, 0.0, 1.0).unwrap(), 55.0);
/// assert_eq!(term(0, 2.5, -1.0).unwrap(), 2.5);
/// assert!(term(-1, 0.0, 1.0).is_err());
/// ```
pub fn term(n: i64, f0: f64, f1: f64) -> Result<f64> {
    let n = checked_index(n, 0)?;
    Ok(term_at(n, f0, f1))
}

/// Ratio of consecutive terms `term(n) / term(n - 1)`.
///
/// Fails with [`Error::InvalidArgument`] when `n < 1` and with
/// [`Error::DivisionByZero`] when `term(n - 1)` is exactly zero.
///
/// ```
/// use golden_recurrence::{convergence_ratio, PHI};
///
/// let ratio = convergence_ratio(30, 1.0, 1.0).unwrap();
/// assert!((ratio - PHI).abs() < 1e-6);
/// assert!(convergence_ratio(1, 0.0, 5.0).is_err());
/// ```
pub fn convergence_ratio(n: i64, f0: f64, f1: f64) -> Result<f64> {
    let n = checked_index(n, 1)?;
    ratio_at(n, f0, f1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PHI, PHI_INVERSE, PSI};

    #[test]
    fn base_cases_are_the_seeds() {
        for (f0, f1) in [(0.0, 1.0), (2.3, -1.7), (-4.0, 0.0), (1e300, -1e-300)] {
            assert_eq!(term(0, f0, f1).unwrap(), f0);
            assert_eq!(term(1, f0, f1).unwrap(), f1);
        }
    }

    #[test]
    fn classic_fibonacci_numbers() {
        let expected = [0.0, 1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0];
        for (n, &value) in expected.iter().enumerate() {
            assert_eq!(term(n as i64, 0.0, 1.0).unwrap(), value, "F({n})");
        }
        assert_eq!(term(50, 0.0, 1.0).unwrap(), 12_586_269_025.0);
    }

    #[test]
    fn lucas_numbers() {
        // L_0 = 2, L_1 = 1
        assert_eq!(term(2, 2.0, 1.0).unwrap(), 3.0);
        assert_eq!(term(10, 2.0, 1.0).unwrap(), 123.0);
    }

    #[test]
    fn recurrence_law_holds_exactly() {
        let (f0, f1) = (2.3, -1.7);
        for n in 2..80 {
            let lhs = term(n, f0, f1).unwrap();
            let rhs = term(n - 1, f0, f1).unwrap() + term(n - 2, f0, f1).unwrap();
            assert_eq!(lhs, rhs, "n = {n}");
        }
    }

    #[test]
    fn negative_index_is_rejected() {
        let err = term(-1, 0.0, 1.0).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(term(i64::MIN, 0.0, 1.0).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn ratio_requires_positive_index() {
        assert!(convergence_ratio(0, 1.0, 1.0).unwrap_err().is_invalid_argument());
        assert!(convergence_ratio(-3, 1.0, 1.0).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn classic_seed_converges_to_phi() {
        let ratio = convergence_ratio(30, 1.0, 1.0).unwrap();
        assert!((ratio - 1.618_033_988_7).abs() < 1e-6, "ratio = {ratio}");
        assert!((ratio - PHI).abs() < 1e-6);
    }

    #[test]
    fn conjugate_axis_converges_to_psi() {
        // On f1 = -f0/phi the golden component vanishes and the sequence is
        // f0 * psi^n, so the ratio sits at psi = -1/phi.
        let f0 = 4.0;
        let ratio = convergence_ratio(30, f0, -f0 / PHI).unwrap();
        assert!(ratio < 0.0);
        assert!((ratio.abs() - PHI_INVERSE).abs() < 1e-3, "ratio = {ratio}");
        assert!((ratio - PSI).abs() < 1e-3);
    }

    #[test]
    fn rounded_conjugate_seed_tracks_psi_early_then_escapes() {
        // A seed rounded to five decimals is only near the axis: the ratio
        // follows psi for a while before the golden component takes over.
        let early = convergence_ratio(5, 4.0, -2.47214).unwrap();
        assert!((early - PSI).abs() < 1e-3, "early = {early}");

        let late = convergence_ratio(40, 4.0, -2.47214).unwrap();
        assert!((late - PHI).abs() < 1e-6, "late = {late}");
    }

    #[test]
    fn zero_denominator_is_reported() {
        let err = convergence_ratio(1, 0.0, 5.0).unwrap_err();
        assert_eq!(
            err,
            Error::DivisionByZero { denominator_index: 0, f0: 0.0, f1: 5.0 }
        );

        // x_1 = 0 for the seed (3, 0)
        assert!(convergence_ratio(2, 3.0, 0.0).unwrap_err().is_division_by_zero());
        // x_2 = 0 for the seed (1, -1)
        assert!(convergence_ratio(3, 1.0, -1.0).unwrap_err().is_division_by_zero());
    }

    #[test]
    fn ratio_matches_quotient_of_terms() {
        let (f0, f1) = (-0.3, 7.25);
        for n in 1..60 {
            let ratio = convergence_ratio(n, f0, f1).unwrap();
            let quotient = term(n, f0, f1).unwrap() / term(n - 1, f0, f1).unwrap();
            assert_eq!(ratio.to_bits(), quotient.to_bits(), "n = {n}");
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let a = term(50, 2.3, -1.7).unwrap();
        let b = term(50, 2.3, -1.7).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn overflow_is_not_clamped() {
        assert!(term(2000, 1.0, 1.0).unwrap().is_infinite());
    }
}
