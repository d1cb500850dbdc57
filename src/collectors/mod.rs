//! One collector per metric.
//!
//! Every collector returns exactly one line. Read failures become the
//! field's fallback string and are only logged.

pub mod desktop;
pub mod hardware;
pub mod system;

use crate::config::Config;
use crate::data::SystemInfo;
use crate::error::Result;
use std::fmt::Display;
use std::path::Path;
use tracing::debug;

/// DRM class directory shared by the GPU and resolution collectors
pub const DRM_ROOT: &str = "/sys/class/drm";

/// `<field>: Not available`
pub fn fallback(field: &str) -> String {
    format!("{}: Not available", field)
}

/// Format a reading, or fall back when it could not be taken
pub fn line_or_fallback<T: Display>(field: &str, reading: Result<T>) -> String {
    match reading {
        Ok(value) => value.to_string(),
        Err(error) => {
            debug!(field, %error, "collector fell back");
            fallback(field)
        }
    }
}

/// Run every collector once, in display order
pub fn collect_system_info(config: &Config) -> SystemInfo {
    SystemInfo {
        user: system::collect_user(),
        os: system::collect_os(),
        host: system::collect_host(),
        resolution: desktop::collect_resolution(desktop::drm_displays()),
        cpu: hardware::collect_cpu(),
        gpu: hardware::collect_gpu(Path::new(DRM_ROOT)),
        memory: hardware::collect_memory(),
        disk: hardware::collect_disk(&config.collectors.disk_volume),
        uptime: system::collect_uptime(),
    }
}
