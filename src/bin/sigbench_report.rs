use clap::Parser;
use sigbench::error::ErrorKind;
use sigbench::logging;
use sigbench::report::{self, ReportPaths};
use sigbench::{DEFAULT_CHART_PATH, DEFAULT_ENV_PATH, DEFAULT_RESULTS_PATH};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "sigbench-report")]
#[command(about = "Render the Ed25519 vs secp256k1 comparison chart from benchmark CSV files")]
struct Args {
    /// Timing results table written by `sigbench`.
    #[arg(long, default_value = DEFAULT_RESULTS_PATH)]
    results: PathBuf,

    /// Environment table written by `sigbench`; optional.
    #[arg(long, default_value = DEFAULT_ENV_PATH)]
    env: PathBuf,

    /// Where to save the chart (PNG).
    #[arg(long, default_value = DEFAULT_CHART_PATH)]
    output: PathBuf,

    /// Open the saved chart in the default image viewer.
    #[arg(long, default_value_t = false)]
    show: bool,
}

fn run(args: Args) -> ExitCode {
    let paths = ReportPaths {
        results: args.results,
        env: args.env,
        output: args.output,
    };

    match report::generate(&paths) {
        Ok(_) => {
            if args.show {
                report::show(&paths.output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            match e.kind() {
                ErrorKind::MissingFile | ErrorKind::MalformedInput => error!("Error: {e}"),
                ErrorKind::Unexpected => error!("Unexpected error: {e}"),
            }
            ExitCode::from(1)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    tracing::subscriber::with_default(logging::subscriber(), || run(args))
}
