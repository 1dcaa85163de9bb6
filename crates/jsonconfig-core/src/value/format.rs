//! Canonical text layouts for floats, durations and timestamps.
//!
//! Durations use the compact `1h2m3.5s` layout:
//!
//! ```text
//! 0            -> 0s
//! 250ns        -> 250ns
//! 1.5µs        -> 1.5µs
//! 20ms         -> 20ms
//! 90s          -> 1m30s
//! 1h exactly   -> 1h0m0s
//! ```
//!
//! Once a larger unit is printed every smaller unit follows it, even when
//! zero.  Fractional digits never carry trailing zeros.

use std::time::Duration;

use chrono::SecondsFormat;

use super::Timestamp;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Shortest decimal text that reads back to the same `f64`, never in
/// exponent notation.  Infinities render as `+Inf` / `-Inf`.
pub fn format_float(v: f64) -> String {
    if v.is_infinite() {
        return if v.is_sign_positive() { "+Inf" } else { "-Inf" }.to_string();
    }
    // Display for f64 is already shortest-round-trip and exponent-free.
    v.to_string()
}

/// Compact `h`/`m`/`s` layout, with `ms`/`µs`/`ns` below one second.
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();

    if nanos < NANOS_PER_SEC {
        return match nanos {
            0 => "0s".to_string(),
            n if n < NANOS_PER_MICRO => format!("{n}ns"),
            n if n < NANOS_PER_MILLI => format!(
                "{}{}µs",
                n / NANOS_PER_MICRO,
                fraction(n % NANOS_PER_MICRO, 3)
            ),
            n => format!(
                "{}{}ms",
                n / NANOS_PER_MILLI,
                fraction(n % NANOS_PER_MILLI, 6)
            ),
        };
    }

    let total_secs = nanos / NANOS_PER_SEC;
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let seconds = total_secs % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if total_secs >= 60 {
        out.push_str(&format!("{minutes}m"));
    }
    out.push_str(&format!(
        "{seconds}{}s",
        fraction(nanos % NANOS_PER_SEC, 9)
    ));
    out
}

/// RFC 3339 with whole seconds; a zero offset is written as `Z`.
pub fn format_timestamp(t: &Timestamp) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// `.ddd` suffix for the `width` least-significant digits, trailing zeros
/// trimmed, or an empty string when `digits` is zero.
fn fraction(digits: u128, width: usize) -> String {
    if digits == 0 {
        return String::new();
    }
    let padded = format!("{digits:0width$}");
    format!(".{}", padded.trim_end_matches('0'))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};

    // ── Floats ────────────────────────────────────────────────────────────────

    #[test]
    fn test_format_float_whole_number_has_no_fraction() {
        assert_eq!(format_float(8080.0), "8080");
    }

    #[test]
    fn test_format_float_keeps_shortest_fraction() {
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(-2.5), "-2.5");
    }

    #[test]
    fn test_format_float_large_value_is_not_exponential() {
        assert_eq!(format_float(1e21), "1000000000000000000000");
    }

    #[test]
    fn test_format_float_non_finite() {
        assert_eq!(format_float(f64::INFINITY), "+Inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-Inf");
        assert_eq!(format_float(f64::NAN), "NaN");
    }

    // ── Durations ─────────────────────────────────────────────────────────────

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(Duration::ZERO), "0s");
    }

    #[test]
    fn test_format_duration_sub_second_units() {
        assert_eq!(format_duration(Duration::from_nanos(250)), "250ns");
        assert_eq!(format_duration(Duration::from_nanos(1_500)), "1.5µs");
        assert_eq!(format_duration(Duration::from_millis(20)), "20ms");
        assert_eq!(format_duration(Duration::from_micros(1_250)), "1.25ms");
    }

    #[test]
    fn test_format_duration_hours_minutes_seconds() {
        assert_eq!(format_duration(Duration::from_secs(3723)), "1h2m3s");
    }

    #[test]
    fn test_format_duration_zero_units_after_largest_are_printed() {
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h0m0s");
        assert_eq!(format_duration(Duration::from_secs(60)), "1m0s");
    }

    #[test]
    fn test_format_duration_fractional_seconds_are_trimmed() {
        assert_eq!(format_duration(Duration::from_millis(61_500)), "1m1.5s");
        assert_eq!(format_duration(Duration::from_millis(2_000)), "2s");
    }

    // ── Timestamps ────────────────────────────────────────────────────────────

    #[test]
    fn test_format_timestamp_utc_uses_z() {
        let t = Utc
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .unwrap()
            .fixed_offset();
        assert_eq!(format_timestamp(&t), "2024-01-02T03:04:05Z");
    }

    #[test]
    fn test_format_timestamp_keeps_offset() {
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        let t = offset.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_timestamp(&t), "2024-01-02T03:04:05+09:00");
    }
}
