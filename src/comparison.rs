//! Console rendering of a run: the ratio table and the environment dump.

use std::io::{self, Write};

use crate::schema::{EnvironmentRecord, TimingResults};
use crate::{Operation, Scheme};

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub operation: Operation,
    pub ed25519_us: f64,
    pub secp256k1_us: f64,
}

impl ComparisonRow {
    /// secp256k1 time over Ed25519 time.
    pub fn ratio(&self) -> f64 {
        self.secp256k1_us / self.ed25519_us
    }
}

/// One row per operation that both schemes have a time for.
pub fn rows(results: &TimingResults) -> Vec<ComparisonRow> {
    Operation::ALL
        .into_iter()
        .filter_map(|operation| {
            Some(ComparisonRow {
                operation,
                ed25519_us: results.time(Scheme::Ed25519, operation)?,
                secp256k1_us: results.time(Scheme::Secp256k1, operation)?,
            })
        })
        .collect()
}

pub fn write_table<W: Write>(out: &mut W, results: &TimingResults) -> io::Result<()> {
    writeln!(
        out,
        "{:<12} {:<12} {:<12} {:<8}",
        "Operation", "Ed25519", "secp256k1", "Ratio"
    )?;
    writeln!(out, "{}", "-".repeat(48))?;
    for row in rows(results) {
        writeln!(
            out,
            "{:<12} {:<12.2} {:<12.2} {:.1}x",
            row.operation.as_str(),
            row.ed25519_us,
            row.secp256k1_us,
            row.ratio()
        )?;
    }
    Ok(())
}

pub fn write_environment<W: Write>(out: &mut W, env: &EnvironmentRecord) -> io::Result<()> {
    writeln!(out, "\n======ENVIRONMENT======")?;
    for line in env.lines() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpLabel;

    fn example() -> TimingResults {
        let values = [12.3, 8.1, 15.4, 110.2, 95.7, 140.9];
        OpLabel::all().zip(values).collect()
    }

    #[test]
    fn ratios_divide_secp_by_ed() {
        let rows = rows(&example());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].operation, Operation::KeyGen);
        assert!((rows[0].ratio() - 110.2 / 12.3).abs() < 1e-12);
        assert!((rows[2].ratio() - 140.9 / 15.4).abs() < 1e-12);
    }

    #[test]
    fn table_layout() {
        let mut buf = Vec::new();
        write_table(&mut buf, &example()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Operation    Ed25519      secp256k1    Ratio   ");
        assert_eq!(lines[1], "-".repeat(48));
        assert_eq!(lines[2], "KeyGen       12.30        110.20       9.0x");
        assert_eq!(lines[4], "Verification 15.40        140.90       9.1x");
    }

    #[test]
    fn incomplete_results_skip_rows() {
        let mut results = example();
        let mut partial = TimingResults::new();
        for (label, v) in results.iter() {
            if label.operation != Operation::Signing || label.scheme == Scheme::Ed25519 {
                partial.insert(label, v);
            }
        }
        results = partial;
        let ops: Vec<Operation> = rows(&results).iter().map(|r| r.operation).collect();
        assert_eq!(ops, vec![Operation::KeyGen, Operation::Verification]);
    }

    #[test]
    fn environment_dump() {
        let mut env = EnvironmentRecord::new();
        env.insert("CPU_count", "8");
        let mut buf = Vec::new();
        write_environment(&mut buf, &env).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "\n======ENVIRONMENT======\nCPU_count: 8\n"
        );
    }
}
