use ed25519_dalek::{Signature, Signer, SigningKey, Verifier};
use rand_chacha::ChaCha8Rng;

use crate::error::{BenchError, BenchResult};
use crate::harness::{measure_fn, try_measure_fn, BenchConfig};
use crate::schema::Measurement;
use crate::{Operation, Scheme, MESSAGE};

use super::record;

pub fn run(
    cfg: &BenchConfig,
    rng: &mut ChaCha8Rng,
    out: &mut Vec<Measurement>,
) -> BenchResult<()> {
    out.push(keygen(cfg, rng));
    out.push(signing(cfg, rng));
    out.push(verification(cfg, rng)?);
    Ok(())
}

pub fn keygen(cfg: &BenchConfig, rng: &mut ChaCha8Rng) -> Measurement {
    let m = measure_fn(cfg.iters(), cfg.warmup_iters(), || SigningKey::generate(&mut *rng));
    record(Scheme::Ed25519, Operation::KeyGen, m)
}

pub fn signing(cfg: &BenchConfig, rng: &mut ChaCha8Rng) -> Measurement {
    let signing_key = SigningKey::generate(&mut *rng);
    let m = measure_fn(cfg.iters(), cfg.warmup_iters(), || {
        let sig: Signature = signing_key.sign(MESSAGE);
        sig
    });
    record(Scheme::Ed25519, Operation::Signing, m)
}

pub fn verification(cfg: &BenchConfig, rng: &mut ChaCha8Rng) -> BenchResult<Measurement> {
    let signing_key = SigningKey::generate(&mut *rng);
    let verifying_key = signing_key.verifying_key();
    let sig: Signature = signing_key.sign(MESSAGE);

    let m = try_measure_fn(cfg.iters(), cfg.warmup_iters(), || {
        verifying_key
            .verify(MESSAGE, &sig)
            .map_err(|e| BenchError::Verification {
                scheme: Scheme::Ed25519,
                reason: e.to_string(),
            })
    })?;
    Ok(record(Scheme::Ed25519, Operation::Verification, m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn cfg() -> BenchConfig {
        BenchConfig {
            iterations: Some(3),
            ..Default::default()
        }
    }

    #[test]
    fn steps_produce_their_labels() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut out = Vec::new();
        run(&cfg(), &mut rng, &mut out).unwrap();

        let names: Vec<&str> = out.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Ed25519 KeyGen", "Ed25519 Signing", "Ed25519 Verification"]
        );
    }

    #[test]
    fn verification_times_the_batch() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let m = verification(&cfg(), &mut rng).unwrap();
        assert_eq!(m.iters, 3);
        assert!(m.total_ns > 0);
    }
}
