//! Coercion helpers for tmux variable values.
//!
//! tmux prints every format variable as text. Flags come back as `1`/`0`,
//! counts as decimal integers and lists as comma-joined strings.

use std::str::FromStr;
use tracing::debug;

/// True only for the literal `"1"`.
#[must_use]
pub fn is_one(s: &str) -> bool {
    s == "1"
}

/// Parse an integer field, defaulting to zero when the value is not a number.
///
/// tmux leaves many numeric variables empty (e.g. `pane_dead_status` on a live
/// pane), so failures are not surfaced. Non-empty values that fail to parse
/// are logged at debug level.
pub fn parse_number<T>(s: &str) -> T
where
    T: FromStr + Default,
{
    s.parse().unwrap_or_else(|_| {
        if !s.is_empty() {
            debug!("non-numeric value {:?} for numeric field, using 0", s);
        }
        T::default()
    })
}

/// Split a comma-separated list. An empty value is a single empty element.
#[must_use]
pub fn parse_list(s: &str) -> Vec<String> {
    s.split(',').map(str::to_string).collect()
}

/// Check a proposed session name.
///
/// `:` and `.` separate session, window and pane in tmux targets.
#[must_use]
pub fn is_valid_session_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(':') && !name.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_one() {
        assert!(is_one("1"));
        assert!(!is_one("0"));
        assert!(!is_one(""));
        assert!(!is_one("true"));
        assert!(!is_one(" 1"));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<i32>("42"), 42);
        assert_eq!(parse_number::<i32>("-3"), -3);
        assert_eq!(parse_number::<u32>("80"), 80);
    }

    #[test]
    fn test_parse_number_defaults_to_zero() {
        assert_eq!(parse_number::<i32>(""), 0);
        assert_eq!(parse_number::<u32>("abc"), 0);
        assert_eq!(parse_number::<u32>("-1"), 0);
        assert_eq!(parse_number::<i64>("12x"), 0);
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list(""), vec![String::new()]);
        assert_eq!(parse_list("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(parse_list("main"), vec!["main"]);
        assert_eq!(parse_list("a,,b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_session_name_validation() {
        assert!(!is_valid_session_name(""));
        assert!(!is_valid_session_name("foo:bar"));
        assert!(!is_valid_session_name("foo.bar"));
        assert!(is_valid_session_name("foo-bar"));
        assert!(is_valid_session_name("work 2"));
    }
}
