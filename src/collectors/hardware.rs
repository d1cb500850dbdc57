//! Hardware information collection (CPU, GPU, Memory, Disk)

use super::{fallback, line_or_fallback};
use crate::data::{CpuInfo, DiskUsage, MemoryUsage};
use crate::error::{FetchError, Result};
use crate::utils::{command::*, file::*, parsing::*};
use std::fs;
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

/// `CPU: {model} ({n} cores)`
pub fn collect_cpu() -> String {
    line_or_fallback("CPU", read_cpu_info())
}

/// `GPU: {names}`, `GPU: Not detected` or `GPU: Not available`
pub fn collect_gpu(drm_root: &Path) -> String {
    gpu_line(detect_all_gpus(drm_root))
}

/// `Memory: {used}GB / {total}GB`
pub fn collect_memory() -> String {
    line_or_fallback("Memory", read_memory_info())
}

/// `Disk ({volume}): {used}GB / {total}GB`
pub fn collect_disk(volume: &str) -> String {
    line_or_fallback(&format!("Disk ({})", volume), get_disk_usage(volume))
}

/// Turn the outcome of GPU enumeration into its info line
pub fn gpu_line(gpus: Result<Vec<String>>) -> String {
    match gpus {
        Ok(names) => {
            let names: Vec<String> = names.into_iter().filter(|n| !n.trim().is_empty()).collect();
            if names.is_empty() {
                "GPU: Not detected".to_string()
            } else {
                format!("GPU: {}", names.join(", "))
            }
        }
        Err(error) => {
            debug!(%error, "GPU enumeration failed");
            fallback("GPU")
        }
    }
}

fn read_cpu_info() -> Result<CpuInfo> {
    let file = fs::File::open("/proc/cpuinfo")?;
    let model = read_cpu_model(std::io::BufReader::new(file))?;
    Ok(CpuInfo {
        model,
        cores: online_cores()?,
    })
}

/// First `model name` entry of a `/proc/cpuinfo` stream
pub fn read_cpu_model<R: BufRead>(mut reader: R) -> Result<String> {
    // Stops after the first CPU
    let mut line = String::with_capacity(128);

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line)?;
        if bytes_read == 0 {
            break;
        }
        if line.starts_with("model name") {
            if let Some(model) = extract_after_colon(&line) {
                return Ok(model);
            }
        }
    }
    Err(FetchError::Detection("CPU info not found".to_string()))
}

fn online_cores() -> Result<usize> {
    // SAFETY: sysconf has no memory side effects.
    let cores = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
    if cores < 1 {
        return Err(FetchError::Detection("Online CPU count unavailable".to_string()));
    }
    Ok(cores as usize)
}

fn read_memory_info() -> Result<MemoryUsage> {
    parse_memory_info(&read_file_safe("/proc/meminfo")?)
}

/// Used memory is MemTotal minus MemAvailable
pub fn parse_memory_info(meminfo: &str) -> Result<MemoryUsage> {
    let total = meminfo_kb(meminfo, "MemTotal")?;
    let available = meminfo_kb(meminfo, "MemAvailable")?;

    Ok(MemoryUsage {
        used_bytes: total.saturating_sub(available) * 1024,
        total_bytes: total * 1024,
    })
}

fn get_disk_usage(volume: &str) -> Result<DiskUsage> {
    use std::ffi::CString;

    let path = CString::new(volume)
        .map_err(|_| FetchError::Parse(format!("Invalid volume path: {}", volume)))?;
    // SAFETY: statvfs is plain old data filled in by the call.
    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };

    if unsafe { libc::statvfs(path.as_ptr(), &mut stat) } != 0 {
        return Err(FetchError::from(std::io::Error::last_os_error()));
    }

    let block_size = stat.f_frsize as u64;
    let total_bytes = (stat.f_blocks as u64).saturating_mul(block_size);
    let free_bytes = (stat.f_bfree as u64).saturating_mul(block_size);

    Ok(DiskUsage {
        volume: volume.to_string(),
        used_bytes: total_bytes.saturating_sub(free_bytes),
        total_bytes,
    })
}

/// Enumerate display adapters by name.
///
/// `lspci` gives marketing names. Without it the DRM cards are listed by
/// vendor and kernel driver. Errors only when neither source can be read.
pub fn detect_all_gpus(drm_root: &Path) -> Result<Vec<String>> {
    let lspci_ran = match run_command("lspci", &[]) {
        Ok(output) => {
            let gpus = gpus_from_lspci(&output);
            if !gpus.is_empty() {
                return Ok(gpus);
            }
            true
        }
        Err(error) => {
            debug!(%error, "lspci unavailable, reading DRM cards");
            false
        }
    };

    match drm_gpus(drm_root) {
        Err(error) if lspci_ran => {
            debug!(%error, "no DRM class directory");
            Ok(Vec::new())
        }
        result => result,
    }
}

/// Display controller names from plain `lspci` output
pub fn gpus_from_lspci(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| {
            line.contains("VGA compatible controller")
                || line.contains("3D controller")
                || line.contains("Display controller")
        })
        .filter_map(|line| line.split_once(": ").map(|(_, description)| description))
        .map(clean_gpu_name)
        .filter(|name| !name.is_empty())
        .collect()
}

/// GPUs behind `cardN` entries of a DRM class directory
pub fn drm_gpus(drm_root: &Path) -> Result<Vec<String>> {
    let mut cards: Vec<_> = fs::read_dir(drm_root)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map_or(false, |name| name.starts_with("card") && !name.contains('-'))
        })
        .collect();
    cards.sort();

    Ok(cards
        .iter()
        .filter_map(|card| drm_card_name(&card.join("device")))
        .collect())
}

fn drm_card_name(device: &Path) -> Option<String> {
    let vendor_id = fs::read_to_string(device.join("vendor")).ok()?;
    let vendor = match vendor_id.trim() {
        "0x8086" => "Intel",
        "0x10de" => "NVIDIA",
        "0x1002" => "AMD",
        "0x1af4" => "Virtio",
        "0x15ad" => "VMware",
        other => other,
    };

    let driver = fs::read_link(device.join("driver"))
        .ok()
        .and_then(|link| link.file_name().map(|n| n.to_string_lossy().into_owned()));

    Some(match driver {
        Some(driver) => format!("{} GPU ({})", vendor, driver),
        None => format!("{} GPU", vendor),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const LSPCI: &str = "\
00:00.0 Host bridge: Intel Corporation Xeon E3-1200 v6/7th Gen Core Processor Host Bridge/DRAM Registers (rev 08)
00:02.0 VGA compatible controller: Intel Corporation UHD Graphics 620 (rev 07)
00:14.0 USB controller: Intel Corporation Sunrise Point-LP USB 3.0 xHCI Controller (rev 21)
01:00.0 3D controller: NVIDIA Corporation GP108M [GeForce MX150] (rev a1)
";

    #[test]
    fn lspci_display_controllers_only() {
        assert_eq!(
            gpus_from_lspci(LSPCI),
            vec!["Intel UHD Graphics 620", "NVIDIA GP108M [GeForce MX150]"]
        );
        assert!(gpus_from_lspci("00:14.0 USB controller: Intel Corporation xHCI\n").is_empty());
    }

    #[test]
    fn gpu_line_joins_names() {
        let line = gpu_line(Ok(vec!["Intel UHD Graphics 620".into(), "NVIDIA GP108M".into()]));
        assert_eq!(line, "GPU: Intel UHD Graphics 620, NVIDIA GP108M");
    }

    #[test]
    fn gpu_line_fallbacks() {
        assert_eq!(gpu_line(Ok(vec![])), "GPU: Not detected");
        assert_eq!(gpu_line(Ok(vec![" ".into()])), "GPU: Not detected");
        assert_eq!(
            gpu_line(Err(FetchError::Detection("no PCI access".into()))),
            "GPU: Not available"
        );
    }

    #[test]
    fn drm_cards_are_named_by_vendor() {
        let root = tempfile::tempdir().unwrap();
        let card0 = root.path().join("card0/device");
        let card1 = root.path().join("card1/device");
        fs::create_dir_all(&card0).unwrap();
        fs::create_dir_all(&card1).unwrap();
        fs::create_dir_all(root.path().join("card0-HDMI-A-1")).unwrap();
        fs::write(card0.join("vendor"), "0x8086\n").unwrap();
        fs::write(card1.join("vendor"), "0x1002\n").unwrap();

        let gpus = drm_gpus(root.path()).unwrap();
        assert_eq!(gpus, vec!["Intel GPU", "AMD GPU"]);
    }

    #[test]
    fn unreadable_drm_root_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        assert!(drm_gpus(&root.path().join("missing")).is_err());
        assert_eq!(drm_gpus(root.path()).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn cpu_model_from_first_processor() {
        let cpuinfo = "processor\t: 0\nvendor_id\t: GenuineIntel\nmodel name\t: Intel(R) Core(TM) i5-8250U CPU @ 1.60GHz\n\nprocessor\t: 1\nmodel name\t: other\n";
        assert_eq!(
            read_cpu_model(Cursor::new(cpuinfo)).unwrap(),
            "Intel(R) Core(TM) i5-8250U CPU @ 1.60GHz"
        );
        assert!(read_cpu_model(Cursor::new("processor\t: 0\n")).is_err());
    }

    #[test]
    fn memory_used_is_total_minus_available() {
        let meminfo = "MemTotal:       16777216 kB\nMemFree:         1048576 kB\nMemAvailable:    8388608 kB\n";
        let memory = parse_memory_info(meminfo).unwrap();
        assert_eq!(memory.total_bytes, 16 * 1024 * 1024 * 1024);
        assert_eq!(memory.to_string(), "Memory: 8GB / 16GB");
        assert!(parse_memory_info("MemTotal: 1 kB\n").is_err());
    }

    #[test]
    fn missing_volume_falls_back() {
        assert_eq!(
            collect_disk("/nonexistent/heartfetch-volume"),
            "Disk (/nonexistent/heartfetch-volume): Not available"
        );
    }

    #[test]
    fn root_volume_reports_usage() {
        let line = collect_disk("/");
        assert!(line.starts_with("Disk (/): "), "{}", line);
    }
}
