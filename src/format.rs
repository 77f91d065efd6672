//! Numeric formatting helpers shared by chart labels and the status bar.

/// Format a value with thousands separators, rounded to an integer:
/// `1234567.8` becomes `"1,234,568"`.
pub fn format_number(value: f64) -> String {
    let negative = value < 0.0;
    let digits = format!("{:.0}", value.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if negative {
        format!("-{out}")
    } else {
        out
    }
}

/// Compact magnitude suffix for axis/value labels: `13_200_000.0` becomes
/// `"13.2M"`.
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if abs >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{value:.0}")
    }
}

/// Years with one decimal, e.g. `"81.3 yr"`.
pub fn format_years(value: f64) -> String {
    format!("{value:.1} yr")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_groups_thousands() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(13_200_000.0), "13,200,000");
        assert_eq!(format_number(1234567.8), "1,234,568");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-1234.0), "-1,234");
    }

    #[test]
    fn test_format_compact_suffixes() {
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_compact(1_900.0), "1.9K");
        assert_eq!(format_compact(13_200_000.0), "13.2M");
        assert_eq!(format_compact(1_500_000_000.0), "1.5B");
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(81.29), "81.3 yr");
        assert_eq!(format_years(0.0), "0.0 yr");
    }
}
