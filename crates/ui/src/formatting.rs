//! Formatting helpers for the estimate panel.
//!
//! Provides thousands-separated whole numbers for the headline metrics and a
//! compact form for chart annotations.

/// Formats a value with zero decimals and comma thousands separators,
/// e.g. `1234567.4` → `"1,234,567"`.
pub fn fmt_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let negative = value < 0.0 && digits.bytes().any(|b| b != b'0');

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a value compactly for chart labels: `"950"`, `"12.5K"`, `"3.4M"`.
pub fn fmt_compact(value: f64) -> String {
    if value.abs() >= 1_000_000_000.0 {
        format!("{:.1}B", value / 1_000_000_000.0)
    } else if value.abs() >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value.abs() >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}

// =============================================================================
// Tests
// =============================================================================
