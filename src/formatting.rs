pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0.00".to_string();
    }
    // Anything that would round to 0.00 keeps its magnitude visible.
    if value.abs() < 0.005 {
        return format!("{value:+.2e}");
    }
    format!("{value:+.2}")
}

pub fn format_suffix(suffix: &str) -> &str {
    let trimmed = suffix.trim();
    if trimmed.is_empty() { "-" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_values() {
        assert_eq!(format_value(5.0), "+5.00");
        assert_eq!(format_value(-3.0), "-3.00");
        assert_eq!(format_value(0.0), "0.00");
        assert_eq!(format_value(-0.0), "0.00");
        assert_eq!(format_value(1.234), "+1.23");
    }

    #[test]
    fn small_magnitudes_never_read_as_zero() {
        assert_eq!(format_value(0.001), "+1.00e-3");
        assert_eq!(format_value(-0.0042), "-4.20e-3");
        assert_eq!(format_value(f64::MIN_POSITIVE), "+2.23e-308");
        assert_eq!(format_value(0.005), "+0.01");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_value(f64::NAN), "NaN");
        assert_eq!(format_value(f64::INFINITY), "+inf");
        assert_eq!(format_value(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn suffix_placeholder() {
        assert_eq!(format_suffix(" Increase ↑"), "Increase ↑");
        assert_eq!(format_suffix(""), "-");
        assert_eq!(format_suffix("  "), "-");
    }
}
