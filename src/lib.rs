use std::fmt;

use serde::{Deserialize, Serialize};

pub mod benches;
pub mod chart;
pub mod comparison;
pub mod environment;
pub mod error;
pub mod harness;
pub mod logging;
pub mod report;
pub mod results;
pub mod schema;

/// Fixed message signed and verified by every signing benchmark.
pub const MESSAGE: &[u8] = b"benchmark test message";

/// Default location of the timing results table.
pub const DEFAULT_RESULTS_PATH: &str = "benchmark_results.csv";

/// Default location of the environment table.
pub const DEFAULT_ENV_PATH: &str = "env_info.csv";

/// Default location of the rendered chart.
pub const DEFAULT_CHART_PATH: &str = "benchmark_comparison.png";

/// Signature scheme under comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Scheme {
    /// Edwards-curve signatures over Curve25519.
    Ed25519,
    /// ECDSA over the secp256k1 short-Weierstrass curve.
    Secp256k1,
}

impl Scheme {
    pub const ALL: [Scheme; 2] = [Scheme::Ed25519, Scheme::Secp256k1];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Ed25519 => "Ed25519",
            Scheme::Secp256k1 => "secp256k1",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation kind timed for each scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Operation {
    KeyGen,
    Signing,
    Verification,
}

impl Operation {
    pub const ALL: [Operation; 3] = [
        Operation::KeyGen,
        Operation::Signing,
        Operation::Verification,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::KeyGen => "KeyGen",
            Operation::Signing => "Signing",
            Operation::Verification => "Verification",
        }
    }

    /// Axis label used on the chart.
    pub fn category(&self) -> &'static str {
        match self {
            Operation::KeyGen => "Key Generation",
            Operation::Signing => "Signing",
            Operation::Verification => "Verification",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (scheme, operation) pair, rendered as e.g. `"Ed25519 Signing"`.
///
/// Ordering follows scheme first, then operation, which is the row order of
/// the results table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OpLabel {
    pub scheme: Scheme,
    pub operation: Operation,
}

impl OpLabel {
    pub const fn new(scheme: Scheme, operation: Operation) -> Self {
        Self { scheme, operation }
    }

    /// All six labels in table order.
    pub fn all() -> impl Iterator<Item = OpLabel> {
        Scheme::ALL.into_iter().flat_map(|scheme| {
            Operation::ALL
                .into_iter()
                .map(move |operation| OpLabel::new(scheme, operation))
        })
    }

    pub fn parse(s: &str) -> Option<OpLabel> {
        OpLabel::all().find(|label| label.to_string() == s)
    }
}

impl fmt::Display for OpLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.scheme, self.operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_table_order() {
        let labels: Vec<String> = OpLabel::all().map(|l| l.to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "Ed25519 KeyGen",
                "Ed25519 Signing",
                "Ed25519 Verification",
                "secp256k1 KeyGen",
                "secp256k1 Signing",
                "secp256k1 Verification",
            ]
        );
    }

    #[test]
    fn parse_is_exact() {
        assert_eq!(
            OpLabel::parse("secp256k1 Signing"),
            Some(OpLabel::new(Scheme::Secp256k1, Operation::Signing))
        );
        assert_eq!(OpLabel::parse("Secp256k1 Signing"), None);
        assert_eq!(OpLabel::parse("Ed25519  KeyGen"), None);
    }

    #[test]
    fn ordering_matches_display_order() {
        let mut labels: Vec<OpLabel> = OpLabel::all().collect();
        labels.reverse();
        labels.sort();
        assert_eq!(labels, OpLabel::all().collect::<Vec<_>>());
    }
}
