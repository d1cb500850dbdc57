//! Hardware readings and their info lines

use crate::utils::parsing::bytes_to_gib;
use std::fmt;

/// CPU model and online logical core count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuInfo {
    pub model: String,
    pub cores: usize,
}

impl fmt::Display for CpuInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CPU: {} ({} cores)", self.model, self.cores)
    }
}

/// Memory usage in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    pub used_bytes: u64,
    pub total_bytes: u64,
}

impl fmt::Display for MemoryUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Memory: {}GB / {}GB",
            bytes_to_gib(self.used_bytes),
            bytes_to_gib(self.total_bytes)
        )
    }
}

/// Usage of a single mounted volume
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskUsage {
    pub volume: String,
    pub used_bytes: u64,
    pub total_bytes: u64,
}

impl fmt::Display for DiskUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Disk ({}): {}GB / {}GB",
            self.volume,
            bytes_to_gib(self.used_bytes),
            bytes_to_gib(self.total_bytes)
        )
    }
}

/// Display mode in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Resolution: {}x{}", self.width, self.height)
    }
}
