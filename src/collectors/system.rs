//! System information collection (user, OS, hostname, uptime)

use super::line_or_fallback;
use crate::data::OsInfo;
use crate::error::{FetchError, Result};
use crate::utils::{file::*, parsing::*};
use std::ffi::CStr;

const OS_RELEASE_PATHS: [&str; 2] = ["/etc/os-release", "/usr/lib/os-release"];

/// `User: {name}`
pub fn collect_user() -> String {
    line_or_fallback("User", get_username().map(|name| format!("User: {}", name)))
}

/// `OS: {product} (Build {release})`
pub fn collect_os() -> String {
    line_or_fallback("OS", read_os_info())
}

/// `Host: {name}`
pub fn collect_host() -> String {
    line_or_fallback("Host", get_hostname().map(|name| format!("Host: {}", name)))
}

/// `Uptime: {h}h {m}m {s}s`
pub fn collect_uptime() -> String {
    line_or_fallback(
        "Uptime",
        read_uptime().map(|secs| format!("Uptime: {}", format_uptime(secs))),
    )
}

/// Keep only the account part of a `DOMAIN\user` style name
pub fn display_username(raw: &str) -> &str {
    raw.rsplit('\\').next().unwrap_or(raw)
}

fn get_username() -> Result<String> {
    let name = passwd_username()
        .or_else(|_| std::env::var("USER").map_err(|e| FetchError::Detection(e.to_string())))?;
    let name = display_username(name.trim());

    if name.is_empty() {
        return Err(FetchError::Detection("Empty username".to_string()));
    }
    Ok(name.to_string())
}

fn passwd_username() -> Result<String> {
    let mut buffer = [0 as libc::c_char; 4096];
    // SAFETY: passwd is plain old data; getpwuid_r fills it with pointers into `buffer`.
    let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
    let mut result: *mut libc::passwd = std::ptr::null_mut();

    let rc = unsafe {
        libc::getpwuid_r(
            libc::geteuid(),
            &mut pwd,
            buffer.as_mut_ptr(),
            buffer.len(),
            &mut result,
        )
    };

    if rc != 0 || result.is_null() || pwd.pw_name.is_null() {
        return Err(FetchError::Detection("No passwd entry for current user".to_string()));
    }

    // SAFETY: pw_name points at a NUL-terminated string inside `buffer`.
    let name = unsafe { CStr::from_ptr(pwd.pw_name) };
    Ok(name.to_string_lossy().into_owned())
}

fn read_os_info() -> Result<OsInfo> {
    let content = OS_RELEASE_PATHS
        .iter()
        .find_map(|path| read_file_safe(path).ok())
        .ok_or_else(|| FetchError::Detection("os-release not found".to_string()))?;

    parse_os_info(&content, &kernel_release()?)
}

/// Product name from os-release content, with the kernel release as build
pub fn parse_os_info(os_release: &str, release: &str) -> Result<OsInfo> {
    let product = os_release_value(os_release, "PRETTY_NAME")
        .or_else(|| os_release_value(os_release, "NAME"))
        .ok_or_else(|| FetchError::Parse("No PRETTY_NAME or NAME in os-release".to_string()))?;

    Ok(OsInfo {
        product,
        build: release.to_string(),
    })
}

fn kernel_release() -> Result<String> {
    // SAFETY: utsname is plain old data filled in by uname.
    let mut uts: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut uts) } != 0 {
        return Err(FetchError::from(std::io::Error::last_os_error()));
    }

    // SAFETY: uname NUL-terminates every field on success.
    let release = unsafe { CStr::from_ptr(uts.release.as_ptr()) };
    Ok(release.to_string_lossy().into_owned())
}

fn get_hostname() -> Result<String> {
    let hostname = read_first_line("/proc/sys/kernel/hostname")?;
    if hostname.is_empty() {
        return Err(FetchError::Detection("Empty hostname".to_string()));
    }
    Ok(hostname)
}

fn read_uptime() -> Result<u64> {
    // /proc/uptime is a single line
    parse_uptime(&read_first_line("/proc/uptime")?)
}

/// Whole seconds from the first field of `/proc/uptime`
pub fn parse_uptime(line: &str) -> Result<u64> {
    let secs: f64 = line
        .split_whitespace()
        .next()
        .and_then(|value| value.parse().ok())
        .ok_or_else(|| FetchError::Parse(format!("Invalid uptime: {}", line)))?;
    Ok(secs as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_prefix_is_dropped() {
        assert_eq!(display_username("WORKGROUP\\ada"), "ada");
        assert_eq!(display_username("ada"), "ada");
    }

    #[test]
    fn os_info_prefers_pretty_name() {
        let content = "NAME=\"Fedora Linux\"\nPRETTY_NAME=\"Fedora Linux 40 (Workstation Edition)\"\n";
        let os = parse_os_info(content, "6.8.5-301.fc40.x86_64").unwrap();
        assert_eq!(
            os.to_string(),
            "OS: Fedora Linux 40 (Workstation Edition) (Build 6.8.5-301.fc40.x86_64)"
        );

        let bare = parse_os_info("NAME=Gentoo\n", "6.6.30").unwrap();
        assert_eq!(bare.product, "Gentoo");
        assert!(parse_os_info("ID=unknown\n", "6.6.30").is_err());
    }

    #[test]
    fn uptime_truncates_fraction() {
        assert_eq!(parse_uptime("93784.93 370000.12").unwrap(), 93784);
        assert!(parse_uptime("").is_err());
        assert!(parse_uptime("soon").is_err());
    }

    #[test]
    fn collectors_always_return_one_labelled_line() {
        for (label, line) in [
            ("User: ", collect_user()),
            ("OS: ", collect_os()),
            ("Host: ", collect_host()),
            ("Uptime: ", collect_uptime()),
        ] {
            assert!(line.starts_with(label), "{:?}", line);
            assert!(!line.contains('\n'));
        }
    }
}
