use core::fmt;
use core::time::Duration;

use serde::{Deserialize, Serialize};

const NANOS_PER_MILLI: u128 = 1_000_000;

/// A time period the way it appears in a configuration file: a bare number
/// (milliseconds) or a string with a unit suffix such as `"100ms"` or `"0.1s"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TimePeriodValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl TimePeriodValue {
    pub fn millis(ms: u64) -> Self {
        TimePeriodValue::Text(format!("{ms}ms"))
    }

    /// Exact conversion to a [`Duration`]. Bare numbers are milliseconds.
    /// Negative values, non-finite values and sub-nanosecond fractions are
    /// rejected; nothing is rounded.
    pub fn to_duration(&self) -> Option<Duration> {
        match self {
            TimePeriodValue::Integer(ms) => u64::try_from(*ms).ok().map(Duration::from_millis),
            TimePeriodValue::Float(ms) => {
                if !ms.is_finite() || *ms < 0.0 || ms.fract() != 0.0 || *ms > u64::MAX as f64 {
                    return None;
                }
                Some(Duration::from_millis(*ms as u64))
            }
            TimePeriodValue::Text(text) => parse(text),
        }
    }
}

impl fmt::Display for TimePeriodValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimePeriodValue::Integer(v) => write!(f, "{v}"),
            TimePeriodValue::Float(v) => write!(f, "{v}"),
            TimePeriodValue::Text(v) => f.write_str(v),
        }
    }
}

/// Polling period of the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateInterval {
    Every(#[serde(serialize_with = "serialize_millis")] Duration),
    Never,
}

impl UpdateInterval {
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            UpdateInterval::Every(d) => Some(*d),
            UpdateInterval::Never => None,
        }
    }
}

impl fmt::Display for UpdateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateInterval::Every(d) => write!(f, "{}ms", d.as_millis()),
            UpdateInterval::Never => f.write_str("never"),
        }
    }
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u128(d.as_millis())
}

/// Parses a time period string. A missing unit means milliseconds.
pub fn parse(text: &str) -> Option<Duration> {
    let text = text.trim();
    let split = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(text.len());
    let (number, unit) = text.split_at(split);
    let unit_nanos = unit_nanos(unit.trim())?;

    let (int_part, frac_part) = match number.split_once('.') {
        Some((i, f)) => (i, f),
        None => (number, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    // u128 keeps the intermediate product exact for any sane input
    if int_part.len() + frac_part.len() > 30 {
        return None;
    }

    let mut mantissa: u128 = 0;
    for c in int_part.chars().chain(frac_part.chars()) {
        mantissa = mantissa * 10 + u128::from(c.to_digit(10)?);
    }
    let scale = 10u128.checked_pow(frac_part.len() as u32)?;
    let scaled = mantissa.checked_mul(unit_nanos)?;
    if scaled % scale != 0 {
        return None;
    }
    let nanos = u64::try_from(scaled / scale).ok()?;
    Some(Duration::from_nanos(nanos))
}

fn unit_nanos(unit: &str) -> Option<u128> {
    let nanos = match unit {
        "ns" => 1,
        "us" | "µs" => 1_000,
        "" | "ms" => NANOS_PER_MILLI,
        "s" | "sec" => 1_000 * NANOS_PER_MILLI,
        "min" => 60_000 * NANOS_PER_MILLI,
        "h" => 3_600_000 * NANOS_PER_MILLI,
        "d" => 86_400_000 * NANOS_PER_MILLI,
        _ => return None,
    };
    Some(nanos)
}

/// Whole milliseconds of `d`, or `None` if `d` has a sub-millisecond remainder.
pub fn whole_millis(d: Duration) -> Option<u64> {
    let nanos = d.as_nanos();
    if nanos % NANOS_PER_MILLI != 0 {
        return None;
    }
    u64::try_from(nanos / NANOS_PER_MILLI).ok()
}

/// Parses an `update_interval` value: `"never"` or a positive whole number of
/// milliseconds.
pub fn parse_update_interval(value: &TimePeriodValue) -> Option<UpdateInterval> {
    if let TimePeriodValue::Text(text) = value {
        if text.trim() == "never" {
            return Some(UpdateInterval::Never);
        }
    }
    let d = value.to_duration()?;
    if whole_millis(d)? == 0 {
        return None;
    }
    Some(UpdateInterval::Every(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_units() {
        assert_eq!(parse("100ms"), Some(Duration::from_millis(100)));
        assert_eq!(parse("100"), Some(Duration::from_millis(100)));
        assert_eq!(parse("60s"), Some(Duration::from_secs(60)));
        assert_eq!(parse("2min"), Some(Duration::from_secs(120)));
        assert_eq!(parse("1h"), Some(Duration::from_secs(3600)));
        assert_eq!(parse("1d"), Some(Duration::from_secs(86_400)));
        assert_eq!(parse("250us"), Some(Duration::from_micros(250)));
        assert_eq!(parse(" 50 ms "), Some(Duration::from_millis(50)));
    }

    #[test]
    fn decimal_seconds_are_exact() {
        assert_eq!(parse("0.1s"), Some(Duration::from_millis(100)));
        assert_eq!(parse("0.025s"), Some(Duration::from_millis(25)));
        assert_eq!(parse(".8s"), Some(Duration::from_millis(800)));
        assert_eq!(parse("0.0001s"), Some(Duration::from_micros(100)));
    }

    #[test]
    fn rejects_garbage() {
        for text in ["", "ms", "fast", "-100ms", "10 parsecs", "1.2.3s", "0.5ns"] {
            assert_eq!(parse(text), None, "{text:?}");
        }
    }

    #[test]
    fn whole_millis_is_strict() {
        assert_eq!(whole_millis(Duration::from_millis(100)), Some(100));
        assert_eq!(whole_millis(Duration::from_micros(100_500)), None);
        assert_eq!(whole_millis(Duration::ZERO), Some(0));
    }

    #[test]
    fn numeric_values_are_milliseconds() {
        assert_eq!(
            TimePeriodValue::Integer(200).to_duration(),
            Some(Duration::from_millis(200))
        );
        assert_eq!(
            TimePeriodValue::Float(400.0).to_duration(),
            Some(Duration::from_millis(400))
        );
        assert_eq!(TimePeriodValue::Float(100.5).to_duration(), None);
        assert_eq!(TimePeriodValue::Float(f64::NAN).to_duration(), None);
        assert_eq!(TimePeriodValue::Integer(-25).to_duration(), None);
    }

    #[test]
    fn update_interval_accepts_never() {
        assert_eq!(
            parse_update_interval(&TimePeriodValue::Text("never".into())),
            Some(UpdateInterval::Never)
        );
        assert_eq!(
            parse_update_interval(&TimePeriodValue::Text("60s".into())),
            Some(UpdateInterval::Every(Duration::from_secs(60)))
        );
        assert_eq!(
            parse_update_interval(&TimePeriodValue::Text("1.5ms".into())),
            None
        );
        assert_eq!(
            parse_update_interval(&TimePeriodValue::Text("0s".into())),
            None
        );
        assert_eq!(parse_update_interval(&TimePeriodValue::Integer(0)), None);
        assert_eq!(UpdateInterval::Never.as_duration(), None);
        assert_eq!(
            UpdateInterval::Every(Duration::from_secs(60)).to_string(),
            "60000ms"
        );
    }
}
