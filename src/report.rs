//! Results table to chart.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{info, warn};

use crate::chart::{extract_times, render_chart, ChartInput};
use crate::error::ReportResult;
use crate::results::{load_environment, load_results};
use crate::schema::EnvironmentRecord;
use crate::{DEFAULT_CHART_PATH, DEFAULT_ENV_PATH, DEFAULT_RESULTS_PATH};

#[derive(Clone, Debug)]
pub struct ReportPaths {
    pub results: PathBuf,
    pub env: PathBuf,
    pub output: PathBuf,
}

impl Default for ReportPaths {
    fn default() -> Self {
        Self {
            results: PathBuf::from(DEFAULT_RESULTS_PATH),
            env: PathBuf::from(DEFAULT_ENV_PATH),
            output: PathBuf::from(DEFAULT_CHART_PATH),
        }
    }
}

/// What went into a rendered chart.
#[derive(Clone, Debug)]
pub struct Report {
    pub input: ChartInput,
    pub environment: EnvironmentRecord,
}

/// Loads both tables and renders the chart to `paths.output`.
///
/// A missing or malformed results table is an error; the environment table
/// is optional and only annotates the chart when it loads cleanly.
pub fn generate(paths: &ReportPaths) -> ReportResult<Report> {
    let results = load_results(&paths.results)?;
    let environment = load_environment(&paths.env);
    let input = extract_times(&results)?;
    render_chart(&input, &environment, &paths.output)?;
    Ok(Report { input, environment })
}

/// Opens `path` in the platform's default image viewer.
pub fn open_in_viewer(path: &Path) -> io::Result<()> {
    let mut cmd = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        Command::new("xdg-open")
    };
    cmd.arg(path).spawn()?;
    info!("Opened {} in the default viewer", path.display());
    Ok(())
}

/// Like [`open_in_viewer`], logging failure instead of returning it.
pub fn show(path: &Path) {
    if let Err(e) = open_in_viewer(path) {
        warn!("Could not open {}: {e}", path.display());
    }
}
