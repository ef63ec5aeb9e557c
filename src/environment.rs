//! Host environment capture.
//!
//! Everything here is best-effort: a property that cannot be determined is
//! recorded as `"unknown"` (or the nearest fallback) rather than failing the run.

use std::env::consts;
use std::fs;

use crate::schema::EnvironmentRecord;

pub const RUST_VERSION: &str = "Rust_version";
pub const PLATFORM: &str = "Platform";
pub const PROCESSOR: &str = "Processor";
pub const ARCHITECTURE: &str = "Architecture";
pub const CPU_COUNT: &str = "CPU_count";

pub fn capture() -> EnvironmentRecord {
    let mut env = EnvironmentRecord::new();
    env.insert(RUST_VERSION, rust_version());
    env.insert(PLATFORM, platform());
    env.insert(PROCESSOR, processor());
    env.insert(ARCHITECTURE, architecture());
    env.insert(CPU_COUNT, num_cpus::get().to_string());
    env
}

fn rust_version() -> String {
    env!("SIGBENCH_RUSTC_VERSION").to_string()
}

/// `os-release-arch`, e.g. `linux-6.8.0-45-generic-x86_64`.
fn platform() -> String {
    match kernel_release() {
        Some(release) => format!("{}-{}-{}", consts::OS, release, consts::ARCH),
        None => format!("{}-{}", consts::OS, consts::ARCH),
    }
}

fn kernel_release() -> Option<String> {
    fs::read_to_string("/proc/sys/kernel/osrelease")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn processor() -> String {
    cpu_model_name().unwrap_or_else(|| consts::ARCH.to_string())
}

fn cpu_model_name() -> Option<String> {
    let cpuinfo = fs::read_to_string("/proc/cpuinfo").ok()?;
    parse_model_name(&cpuinfo)
}

fn parse_model_name(cpuinfo: &str) -> Option<String> {
    cpuinfo
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(key, _)| matches!(key.trim(), "model name" | "Model" | "cpu model"))
        .map(|(_, value)| value.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Pointer width and executable format, e.g. `64bit, ELF`.
fn architecture() -> String {
    let format = match consts::OS {
        "windows" => "WindowsPE",
        "macos" | "ios" => "Mach-O",
        _ => "ELF",
    };
    format!("{}bit, {}", usize::BITS, format)
}
