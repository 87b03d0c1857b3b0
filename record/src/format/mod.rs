//! Human readable rendering of derived values.

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Formats a number of seconds as a compact duration such as `"1d 2h 3m 4s"`.
///
/// Leading units equal to zero are omitted, fractional seconds are truncated
/// and negative values keep their sign (`-90.0` gives `"-1m 30s"`).
pub fn duration(seconds: f64) -> String {
    let sign = if seconds < 0.0 { "-" } else { "" };
    let mut remaining = seconds.abs().trunc() as u64;

    let mut parts = Vec::with_capacity(4);
    for (size, unit) in [(DAY, 'd'), (HOUR, 'h'), (MINUTE, 'm')] {
        let value = remaining / size;
        remaining %= size;
        if value > 0 || !parts.is_empty() {
            parts.push(format!("{value}{unit}"));
        }
    }
    parts.push(format!("{remaining}s"));

    format!("{sign}{}", parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_seconds_only() {
        assert_eq!(duration(0.0), "0s");
        assert_eq!(duration(10.0), "10s");
        assert_eq!(duration(59.9), "59s");
    }

    #[test]
    fn should_keep_inner_zero_units() {
        assert_eq!(duration(3601.0), "1h 0m 1s");
        assert_eq!(duration(90061.0), "1d 1h 1m 1s");
        assert_eq!(duration(86400.0), "1d 0h 0m 0s");
    }

    #[test]
    fn should_keep_negative_sign() {
        assert_eq!(duration(-90.0), "-1m 30s");
    }
}
