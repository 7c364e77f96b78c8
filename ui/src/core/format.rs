//! Formatting helpers for presenting metrics.

/// Group digits in threes: `1234567` → `"1,234,567"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_rate(value: f64) -> String {
    format!("{value:.1}%")
}

/// `"N/A"` for absent metadata.
pub fn or_na(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("N/A")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_grouped() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(123456789), "123,456,789");
    }

    #[test]
    fn rates_have_one_decimal() {
        assert_eq!(format_rate(73.24), "73.2%");
        assert_eq!(format_rate(80.0), "80.0%");
    }

    #[test]
    fn blank_metadata_is_na() {
        assert_eq!(or_na(None), "N/A");
        assert_eq!(or_na(Some("  ")), "N/A");
        assert_eq!(or_na(Some("Covaxin")), "Covaxin");
    }
}
