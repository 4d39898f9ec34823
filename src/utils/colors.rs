/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Truecolor foreground escape for a `#rgb` / `#rrggbb` color.
/// Anything else falls back to RESET.
pub fn hex_to_ansi(hex: &str) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => format!("\x1b[38;2;{};{};{}m", r, g, b),
        None => RESET.to_string(),
    }
}

pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().strip_prefix('#')?;
    if !digits.is_ascii() {
        return None;
    }
    match digits.len() {
        3 => {
            let mut it = digits.chars().map(|c| c.to_digit(16));
            let r = it.next()??;
            let g = it.next()??;
            let b = it.next()??;
            Some(((r * 17) as u8, (g * 17) as u8, (b * 17) as u8))
        }
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Paint `value` with the given hex color.
pub fn paint_hex(value: &str, hex: &str) -> String {
    format!("{}{}{}", hex_to_ansi(hex), value, RESET)
}
