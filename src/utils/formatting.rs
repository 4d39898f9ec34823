//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// "1 guest", "3 guests".
pub fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

/// Opacity fraction as a percentage label, e.g. 0.3 → "30%".
pub fn percent_label(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}
