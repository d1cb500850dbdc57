//! String parsing utilities

use crate::error::{FetchError, Result};

const BYTES_PER_GIB: u64 = 1024 * 1024 * 1024;

/// Extract value after a colon and space
pub fn extract_after_colon(line: &str) -> Option<String> {
    line.split_once(':')
        .map(|(_, value)| value.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Find `key` in `/etc/os-release` style text and return its unquoted value
pub fn os_release_value(content: &str, key: &str) -> Option<String> {
    content
        .lines()
        .filter_map(|line| line.split_once('='))
        .find(|(k, _)| k.trim() == key)
        .map(|(_, v)| v.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|v| !v.is_empty())
}

/// Read a `/proc/meminfo` field, in kB
pub fn meminfo_kb(meminfo: &str, key: &str) -> Result<u64> {
    let line = meminfo
        .lines()
        .find(|line| line.split(':').next() == Some(key))
        .ok_or_else(|| FetchError::Parse(format!("{} missing from meminfo", key)))?;

    line.split_whitespace()
        .nth(1)
        .and_then(|value| value.parse().ok())
        .ok_or_else(|| FetchError::Parse(format!("Invalid memory value: {}", line)))
}

/// Whole gibibytes, truncated
pub fn bytes_to_gib(bytes: u64) -> u64 {
    bytes / BYTES_PER_GIB
}

/// Format uptime from seconds as e.g. `26h 3m 4s`.
///
/// Hours never roll over into days. Once a larger unit is printed the
/// smaller ones follow even when zero, so an hour reads `1h 0m 0s`.
pub fn format_uptime(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Clean and simplify GPU names
pub fn clean_gpu_name(raw_name: &str) -> String {
    let cleaned = raw_name
        .replace("Advanced Micro Devices, Inc.", "AMD")
        .replace("Intel Corporation", "Intel")
        .replace("NVIDIA Corporation", "NVIDIA")
        .replace("Corporation", "");
    let cleaned = cleaned.split(" (rev ").next().unwrap_or(&cleaned);
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
