//! Golden Sweep
//!
//! Run a deterministic convergence sweep and write one JSON object per
//! sample, followed by a summary object, to stdout.
//!
//! Usage: `golden-sweep [config.json]`. Without a config file the sweep is
//! configured from `GOLDEN_*` environment variables.

mod report;

use std::io::{self, BufWriter, Write};
use std::path::Path;

use golden_recurrence::{conjugate_axis_seeds, Sweep, SweepConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Values of `f0` for the seeds placed exactly on the conjugate axis.
const CONJUGATE_AXIS_F0: [f64; 6] = [-10.0, -4.0, -1.0, 1.0, 4.0, 10.0];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "golden_sweep=info,golden_recurrence=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => SweepConfig::from_env()?,
    };
    tracing::info!(?config, "starting sweep");

    let sweep = Sweep::new(config)?;
    let mut seeds = sweep.config().grid()?;
    seeds.extend(conjugate_axis_seeds(CONJUGATE_AXIS_F0));

    let results = sweep.run(seeds);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for sample in &results.samples {
        serde_json::to_writer(&mut out, &report::sample_json(sample, sweep.config().iterations))?;
        writeln!(out)?;
    }
    serde_json::to_writer(&mut out, &report::summary_json(&results.summary))?;
    writeln!(out)?;
    out.flush()?;

    tracing::info!(
        golden = results.summary.golden,
        conjugate = results.summary.conjugate,
        undetermined = results.summary.undetermined,
        failed = results.summary.failed,
        "sweep finished"
    );

    Ok(())
}

/// Read a JSON config file. Missing fields take their defaults.
fn load_config(path: &Path) -> Result<SweepConfig, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let config = parse_config(&raw)?;
    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

fn parse_config(raw: &str) -> Result<SweepConfig, Box<dyn std::error::Error>> {
    let config: SweepConfig = serde_json::from_str(raw)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = parse_config(r#"{"iterations": 10}"#).unwrap();
        assert_eq!(
            config,
            SweepConfig { iterations: 10, ..SweepConfig::default() }
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(parse_config(r#"{"iterations": 0}"#).is_err());
        assert!(parse_config(r#"{"grid_min": 5.0, "grid_max": 1.0}"#).is_err());
        assert!(parse_config(r#"{"tolerance": "tight"}"#).is_err());
        assert!(parse_config("not json").is_err());
    }

    #[test]
    fn loads_config_file() {
        let path = std::env::temp_dir()
            .join(format!("golden-sweep-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"tolerance": 1e-4, "grid_steps": 5}"#).unwrap();
        let loaded = load_config(&path);
        std::fs::remove_file(&path).unwrap();

        let config = loaded.unwrap();
        assert_eq!(config.tolerance, 1e-4);
        assert_eq!(config.grid_steps, 5);
        assert_eq!(config.iterations, SweepConfig::default().iterations);

        assert!(load_config(Path::new("/nonexistent/golden-sweep.json")).is_err());
    }

    #[test]
    fn default_sweep_finds_conjugate_axis_seeds() {
        let sweep = Sweep::new(SweepConfig::default()).unwrap();
        let results = sweep.run(conjugate_axis_seeds(CONJUGATE_AXIS_F0));
        assert_eq!(results.summary.conjugate, CONJUGATE_AXIS_F0.len());
    }
}
