//! Parsing and derivation helpers for user-entered measurements.
//!
//! Every parser returns `None` for input it cannot understand. Callers
//! treat `None` as "not yet tested", never as zero.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Waist-to-height ratio rounded to two decimals.
pub fn calculate_whtr(waist_inches: Decimal, height_inches: Decimal) -> Option<Decimal> {
    if waist_inches <= Decimal::ZERO || height_inches <= Decimal::ZERO {
        return None;
    }
    let ratio = waist_inches / height_inches;
    Some(ratio.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Parses `"mm:ss"` or a bare number of seconds.
///
/// In the `mm:ss` form an unreadable part counts as 0. A bare value of 0
/// is rejected along with unreadable text.
pub fn parse_time(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if text.contains(':') {
        let mut parts = text.split(':');
        let minutes = parts.next().and_then(leading_integer).unwrap_or(0);
        let seconds = parts.next().and_then(leading_integer).unwrap_or(0);
        return minutes.checked_mul(60)?.checked_add(seconds);
    }

    leading_integer(text).filter(|seconds| *seconds != 0)
}

/// Formats seconds as `m:ss`.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Parses a repetition or shuttle count. Zero is a valid count.
pub fn parse_count(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}

/// Parses a positive length in inches, e.g. `"70"` or `"32.5"`.
pub fn parse_inches(text: &str) -> Option<Decimal> {
    Decimal::from_str(text.trim())
        .ok()
        .filter(|inches| *inches > Decimal::ZERO)
}

/// Digits at the start of `text`, ignoring whatever follows them.
fn leading_integer(text: &str) -> Option<u32> {
    let text = text.trim_start();
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whtr_rounds_to_two_decimals() {
        let ratio = calculate_whtr(Decimal::new(325, 1), Decimal::from(70)).unwrap();
        assert_eq!(ratio, Decimal::new(46, 2));
    }

    #[test]
    fn test_whtr_midpoint_rounds_up() {
        // 34.125 / 75 = 0.455
        let ratio = calculate_whtr(Decimal::new(34125, 3), Decimal::from(75)).unwrap();
        assert_eq!(ratio, Decimal::new(46, 2));
    }

    #[test]
    fn test_whtr_rejects_zero_inputs() {
        assert_eq!(calculate_whtr(Decimal::ZERO, Decimal::from(70)), None);
        assert_eq!(calculate_whtr(Decimal::from(32), Decimal::ZERO), None);
    }

    #[test]
    fn test_parse_time_minutes_seconds() {
        assert_eq!(parse_time("13:25"), Some(805));
        assert_eq!(parse_time("0:45"), Some(45));
        assert_eq!(parse_time(" 17:00 "), Some(1020));
    }

    #[test]
    fn test_parse_time_invalid_parts_default_to_zero() {
        assert_eq!(parse_time("13:"), Some(780));
        assert_eq!(parse_time(":30"), Some(30));
        assert_eq!(parse_time("abc:10"), Some(10));
        assert_eq!(parse_time("2:5x"), Some(125));
    }

    #[test]
    fn test_parse_time_bare_seconds() {
        assert_eq!(parse_time("805"), Some(805));
        assert_eq!(parse_time("90s"), Some(90));
    }

    #[test]
    fn test_parse_time_unparseable() {
        assert_eq!(parse_time(""), None);
        assert_eq!(parse_time("   "), None);
        assert_eq!(parse_time("fast"), None);
        assert_eq!(parse_time("0"), None);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(805), "13:25");
        assert_eq!(format_time(60), "1:00");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(parse_time(&format_time(1234)), Some(1234));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("42"), Some(42));
        assert_eq!(parse_count("0"), Some(0));
        assert_eq!(parse_count("4x"), None);
        assert_eq!(parse_count("-3"), None);
    }

    #[test]
    fn test_parse_inches() {
        assert_eq!(parse_inches("70"), Some(Decimal::from(70)));
        assert_eq!(parse_inches(" 32.5 "), Some(Decimal::new(325, 1)));
        assert_eq!(parse_inches("0"), None);
        assert_eq!(parse_inches("tall"), None);
    }
}
