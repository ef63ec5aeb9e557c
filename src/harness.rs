use std::hint::black_box;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Profile {
    #[default]
    Quick,
    Full,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Quick => "quick",
            Profile::Full => "full",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct BenchConfig {
    pub profile: Profile,
    /// Overrides the profile's iteration count when set.
    pub iterations: Option<u64>,
    pub warmup: u64,
    pub seed: u64,
}

impl BenchConfig {
    /// RNG feeding every key generation in a run.
    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed)
    }

    pub fn warmup_iters(&self) -> u64 {
        self.warmup
    }

    pub fn iters(&self) -> u64 {
        if let Some(n) = self.iterations {
            return n.max(1);
        }
        match self.profile {
            Profile::Quick => 1_000,
            Profile::Full => 10_000,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Measured {
    pub iters: u64,
    pub warmup_iters: u64,
    pub total_ns: u128,
    pub ns_per_iter: f64,
}

impl Measured {
    pub fn us_per_iter(&self) -> f64 {
        self.ns_per_iter / 1_000.0
    }
}

pub fn measure_fn<T>(iters: u64, warmup_iters: u64, mut f: impl FnMut() -> T) -> Measured {
    for _ in 0..warmup_iters {
        black_box(f());
    }

    let start = Instant::now();
    for _ in 0..iters {
        black_box(f());
    }
    finish(iters, warmup_iters, start)
}

/// Like [`measure_fn`], but stops at the first error `f` returns.
pub fn try_measure_fn<T, E>(
    iters: u64,
    warmup_iters: u64,
    mut f: impl FnMut() -> Result<T, E>,
) -> Result<Measured, E> {
    for _ in 0..warmup_iters {
        black_box(f()?);
    }

    let start = Instant::now();
    for _ in 0..iters {
        black_box(f()?);
    }
    Ok(finish(iters, warmup_iters, start))
}

fn finish(iters: u64, warmup_iters: u64, start: Instant) -> Measured {
    let total_ns = start.elapsed().as_nanos();
    let denom = iters.max(1) as f64;
    let ns_per_iter = (total_ns as f64) / denom;

    Measured {
        iters,
        warmup_iters,
        total_ns,
        ns_per_iter,
    }
}
