//! Dotted time handling for the trains API.
//!
//! The API sends clock times and travel durations as `"HH.MM"` strings
//! (a dot, not a colon). Both are converted to a minutes key for sorting;
//! anything that does not parse gets [`SENTINEL_MINUTES`] so it sorts
//! after every well-formed value.

/// Ordering key used for absent or malformed times.
///
/// [`parse_dotted`] never produces a key this large.
pub const SENTINEL_MINUTES: u32 = u32::MAX;

/// Error returned when parsing an invalid dotted time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Parse an `"HH.MM"` string into minutes.
///
/// Hours are not capped at 23 because the same format carries travel
/// durations. Keys that would reach [`SENTINEL_MINUTES`] are rejected.
///
/// # Examples
///
/// ```
/// use train_search::domain::parse_dotted;
///
/// assert_eq!(parse_dotted("09.45"), Ok(585));
/// assert_eq!(parse_dotted("26.05"), Ok(1565));
///
/// assert!(parse_dotted("9:45").is_err());
/// assert!(parse_dotted("1.2.3").is_err());
/// assert!(parse_dotted("").is_err());
/// ```
pub fn parse_dotted(s: &str) -> Result<u32, TimeError> {
    let mut parts = s.split('.');
    let (Some(hours), Some(minutes), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(TimeError::new("expected HH.MM format"));
    };

    let hours: u32 = hours
        .trim()
        .parse()
        .map_err(|_| TimeError::new("invalid hour digits"))?;
    let minutes: u32 = minutes
        .trim()
        .parse()
        .map_err(|_| TimeError::new("invalid minute digits"))?;

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .filter(|&key| key < SENTINEL_MINUTES)
        .ok_or_else(|| TimeError::new("time overflow"))
}

/// Ordering key for an optional `"HH.MM"` string.
///
/// Absent or malformed input yields [`SENTINEL_MINUTES`].
pub fn time_to_minutes(time: Option<&str>) -> u32 {
    time.and_then(|t| parse_dotted(t).ok())
        .unwrap_or(SENTINEL_MINUTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        assert_eq!(parse_dotted("00.00"), Ok(0));
        assert_eq!(parse_dotted("09.45"), Ok(585));
        assert_eq!(parse_dotted("16.55"), Ok(1015));
        assert_eq!(parse_dotted("23.59"), Ok(1439));
    }

    #[test]
    fn parse_single_digit_fields() {
        assert_eq!(parse_dotted("9.5"), Ok(545));
    }

    #[test]
    fn parse_durations_beyond_a_day() {
        assert_eq!(parse_dotted("27.30"), Ok(27 * 60 + 30));
    }

    #[test]
    fn parse_invalid_format() {
        assert!(parse_dotted("").is_err());
        assert!(parse_dotted("0945").is_err());
        assert!(parse_dotted("9:45").is_err());
        assert!(parse_dotted("09.45.00").is_err());
        assert!(parse_dotted("ab.cd").is_err());
        assert!(parse_dotted(".45").is_err());
        assert!(parse_dotted("09.").is_err());
    }

    #[test]
    fn sentinel_for_missing_or_malformed() {
        assert_eq!(time_to_minutes(None), SENTINEL_MINUTES);
        assert_eq!(time_to_minutes(Some("")), SENTINEL_MINUTES);
        assert_eq!(time_to_minutes(Some("9:45")), SENTINEL_MINUTES);
        assert_eq!(time_to_minutes(Some("--")), SENTINEL_MINUTES);
    }

    #[test]
    fn well_formed_key() {
        assert_eq!(time_to_minutes(Some("09.45")), 585);
    }

    #[test]
    fn overflow_is_an_error() {
        assert!(parse_dotted("4294967295.00").is_err());
        // Exactly the sentinel
        assert!(parse_dotted("71582788.15").is_err());
    }

    #[test]
    fn long_durations_sort_before_missing() {
        let long = time_to_minutes(Some("170.00"));
        assert_eq!(long, 170 * 60);
        assert!(long < time_to_minutes(None));
        assert!(long < time_to_minutes(Some("9:45")));
    }
}
