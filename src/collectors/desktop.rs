//! Desktop display detection (screen resolution)

use super::{line_or_fallback, DRM_ROOT};
use crate::data::Resolution;
use crate::error::{FetchError, Result};
use crate::utils::file::read_first_line;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

/// Source of the current display mode
pub trait DisplayQuery {
    fn current_mode(&self) -> Result<Resolution>;
}

/// Connected DRM connectors, enumerated once
#[derive(Debug, Default)]
pub struct DrmDisplays {
    connectors: Vec<PathBuf>,
}

static DRM_DISPLAYS: Lazy<DrmDisplays> = Lazy::new(|| DrmDisplays::scan(Path::new(DRM_ROOT)));

/// Process-wide display handle, scanned on first use
pub fn drm_displays() -> &'static DrmDisplays {
    &DRM_DISPLAYS
}

impl DrmDisplays {
    /// Collect `cardN-<connector>` entries whose status is `connected`
    pub fn scan(drm_root: &Path) -> Self {
        let mut connectors: Vec<PathBuf> = match fs::read_dir(drm_root) {
            Ok(entries) => entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| {
                    path.file_name()
                        .and_then(|n| n.to_str())
                        .map_or(false, |name| name.starts_with("card") && name.contains('-'))
                })
                .filter(|path| {
                    read_first_line(path.join("status")).map_or(false, |s| s == "connected")
                })
                .collect(),
            Err(error) => {
                tracing::debug!(%error, root = %drm_root.display(), "no DRM class directory");
                Vec::new()
            }
        };
        connectors.sort();

        DrmDisplays { connectors }
    }

    pub fn connectors(&self) -> &[PathBuf] {
        &self.connectors
    }
}

impl DisplayQuery for DrmDisplays {
    fn current_mode(&self) -> Result<Resolution> {
        self.connectors
            .iter()
            .find_map(|connector| {
                fs::read_to_string(connector.join("modes"))
                    .ok()
                    .and_then(|modes| modes.lines().next().and_then(parse_mode))
            })
            .ok_or_else(|| FetchError::Detection("No connected display".to_string()))
    }
}

/// `Resolution: {w}x{h}`
pub fn collect_resolution(display: &dyn DisplayQuery) -> String {
    line_or_fallback("Resolution", display.current_mode())
}

/// Parse a DRM mode name such as `1920x1080` or `1920x1080i`
pub fn parse_mode(mode: &str) -> Option<Resolution> {
    let (width, height) = mode.trim().split_once('x')?;
    let height: String = height.chars().take_while(|c| c.is_ascii_digit()).collect();

    Some(Resolution {
        width: width.parse().ok()?,
        height: height.parse().ok()?,
    })
}
