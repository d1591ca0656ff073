use chrono::TimeDelta;
use regex_lite::Regex;
use std::sync::LazyLock;

static HOURS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)H").unwrap());
static MINUTES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)M").unwrap());
static SECONDS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)S").unwrap());
static NEGATIVE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-\d").unwrap());
static FRACTIONAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d[.,]\d").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationParseError {
    #[error("negative component in duration {0:?}")]
    Negative(String),

    #[error("fractional component in duration {0:?}")]
    Fractional(String),

    #[error("duration {0:?} is out of range")]
    OutOfRange(String),
}

/// Parses the `[nH][nM][nS]` subset of ISO-8601 used by the YouTube API
/// (`PT1H2M3S`). Each unit is searched for independently, so a missing
/// `PT` prefix is tolerated and an unmatched string is zero.
pub fn parse_iso_duration(iso: &str) -> Result<TimeDelta, DurationParseError> {
    if NEGATIVE.is_match(iso) {
        return Err(DurationParseError::Negative(iso.to_string()));
    }
    if FRACTIONAL.is_match(iso) {
        return Err(DurationParseError::Fractional(iso.to_string()));
    }

    let out_of_range = || DurationParseError::OutOfRange(iso.to_string());
    let component = |re: &Regex| -> Result<i64, DurationParseError> {
        match re.captures(iso) {
            Some(caps) => caps[1].parse().map_err(|_| out_of_range()),
            None => Ok(0),
        }
    };

    let hours = component(&*HOURS)?;
    let minutes = component(&*MINUTES)?;
    let seconds = component(&*SECONDS)?;

    let total = hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or_else(out_of_range)?;

    TimeDelta::try_seconds(total).ok_or_else(out_of_range)
}

/// Formats as `H:MM:SS`, with a `N day(s), ` prefix once the span reaches a day.
pub fn format_duration(duration: TimeDelta) -> String {
    let total = duration.num_seconds();
    let days = total.div_euclid(86_400);
    let rest = total.rem_euclid(86_400);
    let clock = format!("{}:{:02}:{:02}", rest / 3600, rest % 3600 / 60, rest % 60);

    match days {
        0 => clock,
        1 => format!("{} day, {}", days, clock),
        _ => format!("{} days, {}", days, clock),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(iso: &str) -> i64 {
        parse_iso_duration(iso).unwrap().num_seconds()
    }

    #[test]
    fn test_parse_full() {
        assert_eq!(secs("PT1H2M3S"), 3723);
    }

    #[test]
    fn test_parse_without_prefix() {
        assert_eq!(secs("1H2M3S"), 3723);
    }

    #[test]
    fn test_parse_minutes_seconds() {
        assert_eq!(secs("PT5M30S"), 330);
    }

    #[test]
    fn test_parse_seconds_only() {
        assert_eq!(secs("PT45S"), 45);
    }

    #[test]
    fn test_parse_minutes_only() {
        assert_eq!(secs("5M"), 300);
        assert_eq!(secs("PT10M"), 600);
    }

    #[test]
    fn test_parse_hours_only() {
        assert_eq!(secs("PT2H"), 7200);
    }

    #[test]
    fn test_parse_zero() {
        assert_eq!(secs("PT0S"), 0);
    }

    #[test]
    fn test_parse_empty_string() {
        assert_eq!(secs(""), 0);
    }

    #[test]
    fn test_parse_no_components() {
        assert_eq!(secs("invalid"), 0);
        assert_eq!(secs("P0D"), 0);
    }

    #[test]
    fn test_parse_large_minutes() {
        assert_eq!(secs("PT90M"), 5400);
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert_eq!(
            parse_iso_duration("PT-5M"),
            Err(DurationParseError::Negative("PT-5M".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_fractional() {
        assert_eq!(
            parse_iso_duration("PT1.5S"),
            Err(DurationParseError::Fractional("PT1.5S".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(matches!(
            parse_iso_duration("PT99999999999999999999H"),
            Err(DurationParseError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_iso_duration("PT9223372036854775807H"),
            Err(DurationParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_duration(TimeDelta::zero()), "0:00:00");
        assert_eq!(format_duration(TimeDelta::seconds(45)), "0:00:45");
        assert_eq!(format_duration(TimeDelta::seconds(3723)), "1:02:03");
        assert_eq!(format_duration(TimeDelta::seconds(5445)), "1:30:45");
        assert_eq!(format_duration(TimeDelta::seconds(36_000)), "10:00:00");
    }

    #[test]
    fn test_format_days() {
        assert_eq!(format_duration(TimeDelta::seconds(86_400)), "1 day, 0:00:00");
        assert_eq!(
            format_duration(TimeDelta::seconds(2 * 86_400 + 3723)),
            "2 days, 1:02:03"
        );
    }

    #[test]
    fn test_format_matches_parse() {
        for iso in ["PT1H", "PT30M", "PT45S", "PT12H34M56S"] {
            let formatted = format_duration(parse_iso_duration(iso).unwrap());
            let parts: Vec<i64> = formatted.split(':').map(|p| p.parse().unwrap()).collect();
            assert_eq!(parts[0] * 3600 + parts[1] * 60 + parts[2], secs(iso));
        }
    }
}
