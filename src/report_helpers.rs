use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of the widest string, clamped into `min..=max`.
pub fn column_width<'a>(items: impl Iterator<Item = &'a str>, min: usize, max: usize) -> usize {
    items.map(|s| s.width()).max().unwrap_or(min).clamp(min, max)
}

/// Print a horizontal separator of box-drawing chars.
pub fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Serialize to pretty JSON and print to stdout.
pub fn print_json_stdout(value: &impl Serialize) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format an integer with thousand separators (e.g. 1234567 → "1,234,567").
pub fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Format a 0–1 rate as a percentage with two decimals.
pub fn format_rate(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Keep the tail of `s` within `width` display columns, prefixing "..."
/// when anything was cut. URLs differ at the end, so the tail is kept.
pub fn truncate_start(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    let budget = width.saturating_sub(3);
    let mut used = 0;
    let mut start = s.len();
    for (idx, ch) in s.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        start = idx;
    }
    format!("...{}", &s[start..])
}

/// Pad `s` with spaces to `width` display columns.
pub fn pad_display(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(pad))
}

#[cfg(test)]
#[path = "report_helpers_test.rs"]
mod tests;
