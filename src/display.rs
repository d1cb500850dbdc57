use crate::config::Config;
use std::{fs, io::{self, Write}};
use tracing::warn;
use unicode_width::UnicodeWidthStr;

const RESET: &str = "\x1b[0m";

pub const DEFAULT_LOGO: &str = include_str!("../ascii/heart.txt");

/// Split logo text into lines, dropping trailing blank lines only
pub fn logo_lines(text: &str) -> Vec<String> {
    text.trim_end_matches(&['\n', '\r'][..])
        .lines()
        .map(String::from)
        .collect()
}

pub fn load_logo_lines(config: &Config) -> Vec<String> {
    match config.display.ascii_path.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        Some(ascii_path) => {
            let expanded_path = shellexpand::tilde(ascii_path).to_string();
            match fs::read_to_string(&expanded_path) {
                Ok(text) => logo_lines(&text),
                Err(e) => {
                    warn!(path = %expanded_path, error = %e, "Failed to read logo, using default");
                    logo_lines(DEFAULT_LOGO)
                }
            }
        }
        None => logo_lines(DEFAULT_LOGO),
    }
}

/// Widest logo line in terminal columns, ignoring trailing spaces
pub fn logo_width(logo: &[String]) -> usize {
    logo.iter()
        .map(|line| UnicodeWidthStr::width(line.trim_end_matches(' ')))
        .max()
        .unwrap_or(0)
}

fn pad(line: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(line));
    format!("{}{}", line, " ".repeat(padding))
}

/// Interleave logo and info into `pad(logo, width) + " " + info` rows.
///
/// Row count is the longer of the two inputs; the shorter one reads as
/// empty lines past its end.
pub fn render(logo: &[String], info: &[String]) -> Vec<String> {
    render_colored(logo, info, None)
}

/// Like [`render`], wrapping each padded logo cell in `color` and a reset
pub fn render_colored(logo: &[String], info: &[String], color: Option<&str>) -> Vec<String> {
    let width = logo_width(logo);
    let rows = logo.len().max(info.len());

    (0..rows)
        .map(|i| {
            let logo_line = logo.get(i).map_or("", |line| line.trim_end_matches(' '));
            let info_line = info.get(i).map_or("", String::as_str);
            let cell = pad(logo_line, width);

            match color {
                Some(code) => format!("{}{}{} {}", code, cell, RESET, info_line),
                None => format!("{} {}", cell, info_line),
            }
        })
        .collect()
}

pub fn hex_to_ansi(color: &str) -> Option<String> {
    // First try ANSI color names
    if let Some(ansi_code) = get_ansi_color_code(color) {
        return Some(ansi_code.to_string());
    }

    // Hex colors like #FF0000
    if color.starts_with('#') && color.len() == 7 && color.is_ascii() {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&color[1..3], 16),
            u8::from_str_radix(&color[3..5], 16),
            u8::from_str_radix(&color[5..7], 16),
        ) {
            return Some(format!("\x1b[38;2;{};{};{}m", r, g, b));
        }
    }

    None
}

fn get_ansi_color_code(color_name: &str) -> Option<&'static str> {
    match color_name.to_lowercase().as_str() {
        // Standard 8 colors (30-37)
        "black" => Some("\x1b[30m"),
        "red" => Some("\x1b[31m"),
        "green" => Some("\x1b[32m"),
        "yellow" => Some("\x1b[33m"),
        "blue" => Some("\x1b[34m"),
        "magenta" => Some("\x1b[35m"),
        "cyan" => Some("\x1b[36m"),
        "white" => Some("\x1b[37m"),

        // Bright colors (90-97)
        "bright_black" | "gray" | "grey" => Some("\x1b[90m"),
        "bright_red" => Some("\x1b[91m"),
        "bright_green" => Some("\x1b[92m"),
        "bright_yellow" => Some("\x1b[93m"),
        "bright_blue" => Some("\x1b[94m"),
        "bright_magenta" => Some("\x1b[95m"),
        "bright_cyan" => Some("\x1b[96m"),
        "bright_white" => Some("\x1b[97m"),

        "orange" => Some("\x1b[91m"),
        "purple" => Some("\x1b[35m"),
        "violet" => Some("\x1b[95m"),
        "pink" => Some("\x1b[95m"),

        _ => None,
    }
}

/// Colour for the logo column, if one is configured and valid
pub fn logo_color(config: &Config) -> Option<String> {
    let name = config.display.ascii_color.as_deref()?;
    let code = hex_to_ansi(name);
    if code.is_none() {
        warn!(
            color = name,
            "Unknown ascii_color; use a name like red or bright_blue, or a hex color like #FF0000"
        );
    }
    code
}

/// Write rows to `out`, one per line
pub fn write_block<W: Write>(out: &mut W, rows: &[String]) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{}", row)?;
    }
    out.flush()
}

pub fn render_output(config: &Config, info: &[String]) -> io::Result<()> {
    let logo = load_logo_lines(config);
    let color = logo_color(config);
    let rows = render_colored(&logo, info, color.as_deref());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_block(&mut out, &rows)
}
