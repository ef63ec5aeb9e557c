//! Results and environment tables on disk.
//!
//! Both are UTF-8 CSV with a fixed header:
//!
//! ```text
//! Operation,Time (µs/op)
//! Ed25519 KeyGen,12.3
//! ...
//!
//! Property,Value
//! Platform,linux-6.8.0-x86_64
//! ...
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{BenchResult, ReportError, ReportResult};
use crate::schema::{EnvironmentRecord, TimingResults};
use crate::OpLabel;

pub const OPERATION_COLUMN: &str = "Operation";
pub const TIME_COLUMN: &str = "Time (µs/op)";
pub const PROPERTY_COLUMN: &str = "Property";
pub const VALUE_COLUMN: &str = "Value";

#[derive(Debug, Serialize)]
struct ResultRow<'a> {
    #[serde(rename = "Operation")]
    operation: &'a str,
    #[serde(rename = "Time (µs/op)")]
    time: f64,
}

#[derive(Debug, Serialize)]
struct EnvRow<'a> {
    #[serde(rename = "Property")]
    property: &'a str,
    #[serde(rename = "Value")]
    value: &'a str,
}

pub fn write_results(path: &Path, results: &TimingResults) -> BenchResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for (label, time) in results.iter() {
        let operation = label.to_string();
        wtr.serialize(ResultRow {
            operation: &operation,
            time,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_environment(path: &Path, env: &EnvironmentRecord) -> BenchResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    if env.is_empty() {
        wtr.write_record([PROPERTY_COLUMN, VALUE_COLUMN])?;
    }
    for (property, value) in env.iter() {
        wtr.serialize(EnvRow { property, value })?;
    }
    wtr.flush()?;
    Ok(())
}

const RESULTS_TABLE: &str = "Benchmark results";
const ENV_TABLE: &str = "Environment details";

/// Reads the whole file, mapping an absent file to [`ReportError::NotFound`],
/// undecodable bytes to [`ReportError::NotUtf8`] and blank content to
/// [`ReportError::Empty`].
fn read_table(path: &Path, table: &'static str) -> ReportResult<String> {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ReportError::NotFound {
                table,
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    let mut content = String::new();
    match file.read_to_string(&mut content) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            return Err(ReportError::NotUtf8 {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(e.into()),
    }
    if content.trim().is_empty() {
        return Err(ReportError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(content)
}

/// Positions of `required` columns in `headers`, or the names that are absent.
fn locate_columns<const N: usize>(
    headers: &csv::StringRecord,
    required: [&str; N],
) -> ReportResult<[usize; N]> {
    let mut found = [0usize; N];
    let mut missing = Vec::new();
    for (slot, name) in found.iter_mut().zip(required) {
        match headers.iter().position(|h| h.trim() == name) {
            Some(idx) => *slot = idx,
            None => missing.push(name.to_string()),
        }
    }
    if missing.is_empty() {
        Ok(found)
    } else {
        Err(ReportError::MissingColumns(missing))
    }
}

/// Loads and validates the results table.
///
/// All six operation labels must be present; unknown labels are ignored and
/// the first row wins when a label repeats.
pub fn load_results(path: &Path) -> ReportResult<TimingResults> {
    let content = read_table(path, RESULTS_TABLE)?;
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let [op_idx, time_idx] = locate_columns(rdr.headers()?, [OPERATION_COLUMN, TIME_COLUMN])?;

    let mut rows: HashMap<String, String> = HashMap::new();
    let mut row_count = 0usize;
    for record in rdr.records() {
        let record = record?;
        row_count += 1;
        let operation = record.get(op_idx).unwrap_or_default().trim();
        let time = record.get(time_idx).unwrap_or_default().trim();
        rows.entry(operation.to_string())
            .or_insert_with(|| time.to_string());
    }
    info!("Loaded benchmark data with {row_count} rows");

    if row_count == 0 {
        return Err(ReportError::Empty {
            path: path.to_path_buf(),
        });
    }

    let missing: Vec<String> = OpLabel::all()
        .map(|label| label.to_string())
        .filter(|name| !rows.contains_key(name))
        .collect();
    if !missing.is_empty() {
        return Err(ReportError::MissingOperations(missing));
    }

    let mut results = TimingResults::new();
    for label in OpLabel::all() {
        let operation = label.to_string();
        let raw = rows.get(&operation).cloned().unwrap_or_default();
        let time = parse_time(&raw).ok_or_else(|| ReportError::InvalidValue {
            operation: operation.clone(),
            value: raw.clone(),
        })?;
        results.insert(label, time);
    }
    Ok(results)
}

fn parse_time(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|t| t.is_finite() && *t >= 0.0)
}

/// Loads the environment table strictly.
pub fn try_load_environment(path: &Path) -> ReportResult<EnvironmentRecord> {
    let content = read_table(path, ENV_TABLE)?;
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let [prop_idx, value_idx] = locate_columns(rdr.headers()?, [PROPERTY_COLUMN, VALUE_COLUMN])?;

    let mut env = EnvironmentRecord::new();
    for record in rdr.records() {
        let record = record?;
        let property = record.get(prop_idx).unwrap_or_default();
        let value = record.get(value_idx).unwrap_or_default();
        env.insert(property, value);
    }
    Ok(env)
}

/// Loads the environment table, degrading to an empty record on any failure.
pub fn load_environment(path: &Path) -> EnvironmentRecord {
    match try_load_environment(path) {
        Ok(env) => {
            let keys: Vec<&str> = env.iter().map(|(k, _)| k).collect();
            info!("Loaded environment details: {keys:?}");
            env
        }
        Err(e @ ReportError::NotFound { .. }) => {
            warn!("{e}");
            EnvironmentRecord::new()
        }
        Err(e) => {
            warn!("Could not load environment details: {e}");
            EnvironmentRecord::new()
        }
    }
}
