//! heartfetch library
//!
//! Prints a heart logo next to user, OS, hardware and uptime details.

pub mod error;
pub mod data;
pub mod collectors;
pub mod utils;
pub mod config;
pub mod display;

pub use config::Config;
pub use data::SystemInfo;
pub use error::{FetchError, Result};

/// Collect every info line, in display order
pub fn collect_info_lines(config: &Config) -> Vec<String> {
    collectors::collect_system_info(config).into_lines()
}
