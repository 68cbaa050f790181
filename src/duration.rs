//! Parsing of human-readable package-age strings
//!
//! The grammar is deliberately small: an unsuffixed non-negative integer is a
//! number of days, `12h` is hours, `3d` is days, `2w` is weeks. Anything else
//! does not parse.

use std::time::Duration;

const SECONDS_PER_HOUR: u64 = 60 * 60;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_WEEK: u64 = 7 * SECONDS_PER_DAY;

/// Parse a package-age string into a [`Duration`].
///
/// Returns `None` when the input does not match the grammar; the caller owns
/// the error message.
pub fn parse(value: &str) -> Option<Duration> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let (digits, suffix) = match value.chars().last() {
        Some(c) if c.is_ascii_digit() => (value, None),
        // Split off the suffix by its own width; it need not be ASCII.
        Some(c) => (&value[..value.len() - c.len_utf8()], Some(c)),
        None => return None,
    };

    let count: u64 = digits.parse().ok()?;

    let seconds = match suffix {
        None | Some('d') => count.checked_mul(SECONDS_PER_DAY)?,
        Some('h') => count.checked_mul(SECONDS_PER_HOUR)?,
        Some('w') => count.checked_mul(SECONDS_PER_WEEK)?,
        Some(_) => return None,
    };

    Some(Duration::from_secs(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_zero() {
        assert_eq!(parse("0"), Some(Duration::ZERO));
    }

    #[test]
    fn test_parse_bare_integer_is_days() {
        assert_eq!(parse("7"), Some(Duration::from_secs(7 * SECONDS_PER_DAY)));
    }

    #[test]
    fn test_parse_hours() {
        assert_eq!(
            parse("12h"),
            Some(Duration::from_secs(12 * SECONDS_PER_HOUR))
        );
    }

    #[test]
    fn test_parse_days() {
        assert_eq!(parse("3d"), Some(Duration::from_secs(3 * SECONDS_PER_DAY)));
    }

    #[test]
    fn test_parse_weeks() {
        assert_eq!(
            parse("2w"),
            Some(Duration::from_secs(14 * SECONDS_PER_DAY))
        );
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse("xyz"), None);
        assert_eq!(parse("3x"), None);
        assert_eq!(parse("h"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("-3d"), None);
        assert_eq!(parse("3.5d"), None);
    }

    #[test]
    fn test_parse_non_ascii_suffix_is_rejected() {
        assert_eq!(parse("3µ"), None);
        assert_eq!(parse("µ"), None);
        assert_eq!(parse("2週"), None);
    }
}
