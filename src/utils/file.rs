//! File reading utilities

use crate::error::{FetchError, Result};
use std::fs;
use std::path::Path;

/// Read a file to string with error handling
pub fn read_file_safe<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(path).map_err(FetchError::from)
}

/// Read first line of a file, trimmed
/// Meant for single-line files like /proc/sys/kernel/hostname and /proc/uptime
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let path_cstr = CString::new(path.as_ref().as_os_str().as_bytes())
        .map_err(|_| FetchError::Parse("Invalid path".to_string()))?;

    let mut buffer = [0u8; 256];
    // SAFETY: the descriptor is only used inside this block and is always closed,
    // and `read` never writes past `buffer.len()`.
    let bytes_read = unsafe {
        let fd = libc::open(path_cstr.as_ptr(), libc::O_RDONLY);
        if fd < 0 {
            return Err(FetchError::from(std::io::Error::last_os_error()));
        }

        let bytes_read = libc::read(fd, buffer.as_mut_ptr() as *mut libc::c_void, buffer.len());
        libc::close(fd);
        bytes_read
    };

    if bytes_read < 0 {
        return Err(FetchError::from(std::io::Error::last_os_error()));
    }

    let content = std::str::from_utf8(&buffer[..bytes_read as usize])
        .map_err(|_| FetchError::Parse("Invalid UTF-8".to_string()))?;
    Ok(content.lines().next().unwrap_or("").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn first_line_is_trimmed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  4242.17 16000.01  ").unwrap();
        writeln!(file, "second").unwrap();

        assert_eq!(read_first_line(file.path()).unwrap(), "4242.17 16000.01");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_first_line("/nonexistent/heartfetch/file").unwrap_err();
        assert!(matches!(err, FetchError::Io(_)));
    }
}
