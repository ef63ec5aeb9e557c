use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{OpLabel, Operation, Scheme};

/// Average cost per operation in microseconds, keyed by label.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimingResults {
    times: BTreeMap<OpLabel, f64>,
}

impl TimingResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: OpLabel, us_per_op: f64) {
        self.times.insert(label, us_per_op);
    }

    pub fn get(&self, label: OpLabel) -> Option<f64> {
        self.times.get(&label).copied()
    }

    pub fn time(&self, scheme: Scheme, operation: Operation) -> Option<f64> {
        self.get(OpLabel::new(scheme, operation))
    }

    /// Labels in table order.
    pub fn iter(&self) -> impl Iterator<Item = (OpLabel, f64)> + '_ {
        self.times.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Required labels that have no entry, in table order.
    pub fn missing(&self) -> Vec<OpLabel> {
        OpLabel::all()
            .filter(|label| !self.times.contains_key(label))
            .collect()
    }
}

impl FromIterator<(OpLabel, f64)> for TimingResults {
    fn from_iter<I: IntoIterator<Item = (OpLabel, f64)>>(iter: I) -> Self {
        Self {
            times: iter.into_iter().collect(),
        }
    }
}

/// Host properties captured alongside a run, in capture order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentRecord {
    entries: Vec<(String, String)>,
}

impl EnvironmentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property`, replacing an existing value in place.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `key: value` lines, as shown on the console and under the chart.
    pub fn lines(&self) -> Vec<String> {
        self.iter().map(|(k, v)| format!("{k}: {v}")).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMeta {
    pub schema_version: u32,
    pub bench_version: String,
    pub profile: String,
    pub seed: u64,
    pub timestamp_utc: String,
    pub git_sha: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    pub name: String,
    pub scheme: Scheme,
    pub operation: Operation,
    pub unit: String,

    pub iters: u64,
    pub warmup_iters: u64,

    pub total_ns: u128,
    pub us_per_op: f64,
}

impl Measurement {
    pub fn label(&self) -> OpLabel {
        OpLabel::new(self.scheme, self.operation)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchReport {
    pub run: RunMeta,
    pub environment: EnvironmentRecord,
    pub measurements: Vec<Measurement>,
}

impl BenchReport {
    pub fn timings(&self) -> TimingResults {
        self.measurements
            .iter()
            .map(|m| (m.label(), m.us_per_op))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_lists_absent_labels_in_order() {
        let mut results = TimingResults::new();
        for label in OpLabel::all().take(4) {
            results.insert(label, 1.0);
        }
        let missing: Vec<String> = results.missing().iter().map(|l| l.to_string()).collect();
        assert_eq!(missing, vec!["secp256k1 Signing", "secp256k1 Verification"]);
    }

    #[test]
    fn environment_insert_replaces_in_place() {
        let mut env = EnvironmentRecord::new();
        env.insert("Platform", "linux");
        env.insert("CPU_count", "8");
        env.insert("Platform", "macos");
        assert_eq!(env.len(), 2);
        assert_eq!(env.get("Platform"), Some("macos"));
        assert_eq!(env.lines(), vec!["Platform: macos", "CPU_count: 8"]);
    }

    #[test]
    fn report_json_carries_timings() {
        let report = BenchReport {
            run: RunMeta {
                schema_version: 1,
                bench_version: "0.1.0".into(),
                profile: "quick".into(),
                seed: 0,
                timestamp_utc: "unix:0".into(),
                git_sha: None,
            },
            environment: EnvironmentRecord::new(),
            measurements: vec![Measurement {
                name: "Ed25519 Signing".into(),
                scheme: Scheme::Ed25519,
                operation: Operation::Signing,
                unit: "us/op".into(),
                iters: 1_000,
                warmup_iters: 0,
                total_ns: 8_100_000,
                us_per_op: 8.1,
            }],
        };

        let json = serde_json::to_string(&report).unwrap();
        let back: BenchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.timings().time(Scheme::Ed25519, Operation::Signing), Some(8.1));
    }
}
