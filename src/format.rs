//! Formatting helpers for presenting metric values.
//!
//! Display-only: precision and currency suffixes live here, never in the
//! metric or projection layers.

/// `26540.0` → `"$26,540M"`.
pub fn format_millions(value: f64) -> String {
    format!("${}M", group_thousands(value.round() as i64))
}

/// Millions → billions with the given precision: `26540.0` → `"$26.5B"`.
pub fn format_billions(value_millions: f64, decimals: usize) -> String {
    format!("${:.*}B", decimals, value_millions / 1000.0)
}

/// `14.87` → `"14.9%"`.
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

/// Signed percentage with an explicit plus, matching the report's growth
/// styling: `14.87` → `"+14.9%"`, `-3.2` → `"-3.2%"`.
pub fn format_signed_percent(value: f64, decimals: usize) -> String {
    if value >= 0.0 {
        format!("+{value:.decimals$}%")
    } else {
        format!("{value:.decimals$}%")
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millions_are_grouped_with_commas() {
        assert_eq!(format_millions(26540.0), "$26,540M");
        assert_eq!(format_millions(950.0), "$950M");
        assert_eq!(format_millions(1234567.0), "$1,234,567M");
    }

    #[test]
    fn billions_scale_down_from_millions() {
        assert_eq!(format_billions(26540.0, 1), "$26.5B");
        assert_eq!(format_billions(52300.0, 0), "$52B");
    }

    #[test]
    fn signed_percent_keeps_the_plus() {
        assert_eq!(format_signed_percent(14.87, 1), "+14.9%");
        assert_eq!(format_signed_percent(0.0, 1), "+0.0%");
        assert_eq!(format_signed_percent(-3.25, 1), "-3.2%");
    }

    #[test]
    fn percent_has_no_sign() {
        assert_eq!(format_percent(7.02, 1), "7.0%");
    }
}
