//! Timing steps for each signature scheme.
//!
//! Every step appends one [`Measurement`] to the run's record. Signing and
//! verification reuse a key pair generated outside the timed loop so only the
//! operation under test is measured.

pub mod ed25519;

use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::error::BenchResult;
use crate::harness::{BenchConfig, Measured};
use crate::schema::Measurement;
use crate::{OpLabel, Operation, Scheme};

/// Runs all six benchmarks, Ed25519 first.
pub fn run_all(cfg: &BenchConfig) -> BenchResult<Vec<Measurement>> {
    let mut rng = cfg.rng();
    let mut out = Vec::with_capacity(6);

    for scheme in Scheme::ALL {
        info!(
            %scheme,
            iters = cfg.iters(),
            warmup = cfg.warmup_iters(),
            "benchmarking"
        );
        run_scheme(scheme, cfg, &mut rng, &mut out)?;
    }

    Ok(out)
}

pub fn run_scheme(
    scheme: Scheme,
    cfg: &BenchConfig,
    rng: &mut ChaCha8Rng,
    out: &mut Vec<Measurement>,
) -> BenchResult<()> {
    match scheme {
        Scheme::Ed25519 => ed25519::run(cfg, rng, out),
        Scheme::Secp256k1 => secp256k1::run(cfg, rng, out),
    }
}

pub(crate) fn record(scheme: Scheme, operation: Operation, m: Measured) -> Measurement {
    let label = OpLabel::new(scheme, operation);
    let us_per_op = m.us_per_iter();
    debug!(%label, us_per_op, total_ns = m.total_ns as u64, "measured");

    Measurement {
        name: label.to_string(),
        scheme,
        operation,
        unit: "us/op".to_string(),
        iters: m.iters,
        warmup_iters: m.warmup_iters,
        total_ns: m.total_ns,
        us_per_op,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_all_covers_every_label() {
        let cfg = BenchConfig {
            iterations: Some(5),
            warmup: 1,
            ..Default::default()
        };
        let measurements = run_all(&cfg).unwrap();

        let labels: Vec<OpLabel> = measurements.iter().map(|m| m.label()).collect();
        assert_eq!(labels, OpLabel::all().collect::<Vec<_>>());
        for m in &measurements {
            assert_eq!(m.iters, 5);
            assert_eq!(m.warmup_iters, 1);
            assert_eq!(m.unit, "us/op");
            assert!(m.us_per_op > 0.0, "{} took no time", m.name);
        }
    }
}
