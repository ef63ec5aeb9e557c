use clap::{Parser, ValueEnum};
use sigbench::benches;
use sigbench::comparison;
use sigbench::environment;
use sigbench::error::BenchResult;
use sigbench::harness::{BenchConfig, Profile};
use sigbench::logging;
use sigbench::results;
use sigbench::schema::{BenchReport, RunMeta, TimingResults};
use sigbench::{DEFAULT_ENV_PATH, DEFAULT_RESULTS_PATH};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProfileArg {
    Quick,
    Full,
}

impl From<ProfileArg> for Profile {
    fn from(v: ProfileArg) -> Self {
        match v {
            ProfileArg::Quick => Profile::Quick,
            ProfileArg::Full => Profile::Full,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sigbench")]
#[command(about = "Time Ed25519 and secp256k1 key generation, signing and verification")]
struct Args {
    /// Iteration budget: quick = 1000, full = 10000 per operation.
    #[arg(long, value_enum, default_value_t = ProfileArg::Quick)]
    profile: ProfileArg,

    /// Exact iteration count per operation; overrides --profile.
    #[arg(long)]
    iterations: Option<u64>,

    /// Untimed calls before each measured batch.
    #[arg(long, default_value_t = 0)]
    warmup: u64,

    /// Seed for the key-generation RNG.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Where to write the timing results table.
    #[arg(long, default_value = DEFAULT_RESULTS_PATH)]
    results: PathBuf,

    /// Where to write the environment table.
    #[arg(long, default_value = DEFAULT_ENV_PATH)]
    env: PathBuf,

    /// Also write a JSON report with per-measurement detail.
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,
}

fn now_utc() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("unix:{secs}")
}

fn git_sha_short() -> Option<String> {
    // Best-effort: read from environment set by CI/build scripts.
    std::env::var("GIT_SHA")
        .ok()
        .or_else(|| std::env::var("GITHUB_SHA").ok())
        .map(|s| s.chars().take(12).collect())
}

fn run(args: Args) -> BenchResult<()> {
    let cfg = BenchConfig {
        profile: args.profile.into(),
        iterations: args.iterations,
        warmup: args.warmup,
        seed: args.seed,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let measurements = benches::run_all(&cfg)?;
    let timings: TimingResults = measurements
        .iter()
        .map(|m| (m.label(), m.us_per_op))
        .collect();

    comparison::write_table(&mut out, &timings)?;

    results::write_results(&args.results, &timings)?;
    writeln!(
        out,
        "Benchmark results saved to '{}'",
        args.results.display()
    )?;

    let env = environment::capture();
    comparison::write_environment(&mut out, &env)?;
    results::write_environment(&args.env, &env)?;
    writeln!(
        out,
        "Environment information saved to '{}'",
        args.env.display()
    )?;

    if let Some(path) = &args.json {
        let report = BenchReport {
            run: RunMeta {
                schema_version: 1,
                bench_version: env!("CARGO_PKG_VERSION").to_string(),
                profile: cfg.profile.as_str().to_string(),
                seed: cfg.seed,
                timestamp_utc: now_utc(),
                git_sha: git_sha_short(),
            },
            environment: env,
            measurements,
        };
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json)?;
        info!("JSON report written to {}", path.display());
    }

    Ok(())
}

fn main() -> BenchResult<()> {
    let args = Args::parse();
    tracing::subscriber::with_default(logging::subscriber(), || run(args))
}
