//! System-wide information structures

use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Operating system product name and build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsInfo {
    pub product: String,
    pub build: String,
}

impl fmt::Display for OsInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OS: {} (Build {})", self.product, self.build)
    }
}

/// Every info line gathered by heartfetch, one per metric
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInfo {
    pub user: String,
    pub os: String,
    pub host: String,
    pub resolution: String,
    pub cpu: String,
    pub gpu: String,
    pub memory: String,
    pub disk: String,
    pub uptime: String,
}

impl SystemInfo {
    /// Dashes as wide as the user line
    pub fn separator(&self) -> String {
        "-".repeat(UnicodeWidthStr::width(self.user.as_str()))
    }

    /// Lines in display order, with the separator under the user line
    pub fn into_lines(self) -> Vec<String> {
        let separator = self.separator();
        vec![
            self.user,
            separator,
            self.os,
            self.host,
            self.resolution,
            self.cpu,
            self.gpu,
            self.memory,
            self.disk,
            self.uptime,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SystemInfo {
        SystemInfo {
            user: "User: ada".to_string(),
            os: "OS: Debian GNU/Linux 12 (bookworm) (Build 6.1.0-18-amd64)".to_string(),
            host: "Host: engine".to_string(),
            resolution: "Resolution: Not available".to_string(),
            cpu: "CPU: AMD Ryzen 5 3600 6-Core Processor (12 cores)".to_string(),
            gpu: "GPU: Not detected".to_string(),
            memory: "Memory: 5GB / 31GB".to_string(),
            disk: "Disk (/): 80GB / 914GB".to_string(),
            uptime: "Uptime: 2h 5m 0s".to_string(),
        }
    }

    #[test]
    fn os_line() {
        let os = OsInfo {
            product: "Arch Linux".to_string(),
            build: "6.9.7-arch1-1".to_string(),
        };
        assert_eq!(os.to_string(), "OS: Arch Linux (Build 6.9.7-arch1-1)");
    }

    #[test]
    fn lines_keep_display_order() {
        let lines = sample().into_lines();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "User: ada");
        assert_eq!(lines[1], "---------");
        assert_eq!(lines[2], "OS: Debian GNU/Linux 12 (bookworm) (Build 6.1.0-18-amd64)");
        assert_eq!(lines[4], "Resolution: Not available");
        assert_eq!(lines[6], "GPU: Not detected");
        assert_eq!(lines[9], "Uptime: 2h 5m 0s");
    }

    #[test]
    fn separator_tracks_user_width() {
        let mut info = sample();
        info.user = "User: Not available".to_string();
        assert_eq!(info.separator().len(), "User: Not available".len());
    }
}
