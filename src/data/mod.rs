//! Readings produced by the collectors

pub mod hardware;
pub mod system;

pub use hardware::{CpuInfo, DiskUsage, MemoryUsage, Resolution};
pub use system::{OsInfo, SystemInfo};
