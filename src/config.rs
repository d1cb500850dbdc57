use crate::error::{FetchError, Result};
use dirs::config_dir;
use serde::Deserialize;
use std::{fs, io, path::{Path, PathBuf}};
use tracing::warn;

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub collectors: CollectorConfig,
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Logo file used instead of the embedded one
    pub ascii_path: Option<String>,
    /// ANSI colour name or `#RRGGBB` for the logo column
    pub ascii_color: Option<String>,
}

#[derive(Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct CollectorConfig {
    pub disk_volume: String,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        CollectorConfig {
            disk_volume: "/".to_string(),
        }
    }
}

/// `~/.config/heartfetch/config.toml` on Linux
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("heartfetch/config.toml"))
}

pub fn parse_config(config_data: &str) -> Result<Config> {
    toml::de::from_str(config_data).map_err(|e| FetchError::Config(e.to_string()))
}

/// Load the config at `path`. A missing file means defaults; a broken one
/// is reported and also means defaults.
pub fn load_config_from(path: &Path) -> Config {
    let config_data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Config::default(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read config file");
            return Config::default();
        }
    };

    parse_config(&config_data).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "Failed to parse config file");
        Config::default()
    })
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Config::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.collectors.disk_volume, "/");
        assert_eq!(config.display.ascii_color, None);
    }

    #[test]
    fn partial_sections() {
        let config = parse_config("[display]\nascii_color = \"#ff0000\"\n").unwrap();
        assert_eq!(config.display.ascii_color.as_deref(), Some("#ff0000"));
        assert_eq!(config.display.ascii_path, None);
        assert_eq!(config.collectors.disk_volume, "/");

        let config = parse_config("[collectors]\ndisk_volume = \"/home\"\n").unwrap();
        assert_eq!(config.collectors.disk_volume, "/home");
    }

    #[test]
    fn malformed_config_is_config_error() {
        let err = parse_config("[display\nascii_color = 3").unwrap_err();
        assert!(matches!(err, FetchError::Config(_)));
    }

    #[test]
    fn load_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config_from(&dir.path().join("config.toml")), Config::default());

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "display = [").unwrap();
        assert_eq!(load_config_from(&broken), Config::default());

        let good = dir.path().join("good.toml");
        fs::write(&good, "[display]\nascii_path = \"~/logo.txt\"\n").unwrap();
        assert_eq!(load_config_from(&good).display.ascii_path.as_deref(), Some("~/logo.txt"));
    }
}
