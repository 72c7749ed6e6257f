//! JSON rendering of sweep results.

use golden_recurrence::{Sample, SweepSummary};
use serde_json::{json, Value};

/// One sample as a JSON object.
///
/// Successful samples carry `ratio` and `limit`; failed ones carry `error`.
pub fn sample_json(sample: &Sample, iterations: u64) -> Value {
    let mut value = json!({
        "f0": sample.seed.f0,
        "f1": sample.seed.f1,
        "n": iterations,
    });
    match &sample.outcome {
        Ok(convergence) => {
            value["ratio"] = json!(convergence.ratio);
            value["limit"] = json!(convergence.limit);
        }
        Err(e) => {
            value["error"] = json!(e.to_string());
        }
    }
    value
}

/// The summary line.
pub fn summary_json(summary: &SweepSummary) -> Value {
    json!({ "summary": summary, "total": summary.total() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use golden_recurrence::{SeedPair, Sweep, SweepConfig};

    #[test]
    fn converged_sample() {
        let sweep = Sweep::new(SweepConfig::default()).unwrap();
        let sample = sweep.sample(SeedPair::CLASSIC);
        let value = sample_json(&sample, 30);

        assert_eq!(value["f0"], 1.0);
        assert_eq!(value["n"], 30);
        assert_eq!(value["limit"], "golden");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn failed_sample() {
        let sweep = Sweep::new(SweepConfig { iterations: 1, ..SweepConfig::default() }).unwrap();
        let sample = sweep.sample(SeedPair { f0: 0.0, f1: 5.0 });
        let value = sample_json(&sample, 1);

        assert!(value["error"].as_str().unwrap().starts_with("division by zero"));
        assert!(value.get("ratio").is_none());
    }

    #[test]
    fn summary_counts() {
        let summary = SweepSummary { golden: 3, conjugate: 1, undetermined: 0, failed: 2 };
        let value = summary_json(&summary);
        assert_eq!(value["total"], 6);
        assert_eq!(value["summary"]["failed"], 2);
    }
}
