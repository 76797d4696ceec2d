//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. Timestamps are written as RFC 3339 with microsecond precision and a
//! `Z` suffix so that lexical order in SQL equals chronological order.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

use crate::error::DatabaseError;

/// Current time truncated to the precision stored in the database.
///
/// Entities returned from a create call compare equal to the same entity read
/// back later.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Format a timestamp for storage.
#[must_use]
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00.000000Z"`) and `SQLite`'s
/// default format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a JSON array TEXT column into a list of strings.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the column is not a JSON array of strings.
pub fn parse_string_list(s: &str) -> Result<Vec<String>, DatabaseError> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(s)
        .map_err(|e| DatabaseError::Query(format!("Invalid JSON list in column: {e}")))
}

/// Serialize a list of strings for a JSON TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Other` if serialization fails.
pub fn to_string_list(items: &[String]) -> Result<String, DatabaseError> {
    serde_json::to_string(items).map_err(|e| DatabaseError::Other(e.into()))
}

/// Escape `%`, `_` and `\` so user input matches literally inside `LIKE ... ESCAPE '\'`.
#[must_use]
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build `?{start}, ?{start+1}, ...` placeholders for an `IN (...)` list.
#[must_use]
pub fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datetime_roundtrip_keeps_micros() {
        let t = now();
        let parsed = parse_datetime(&format_datetime(&t)).unwrap();
        assert_eq!(parsed, t);
    }

    #[test]
    fn stored_format_sorts_chronologically() {
        let a = parse_datetime("2026-01-01T09:00:00.000001Z").unwrap();
        let b = parse_datetime("2026-01-01T09:00:00.100000Z").unwrap();
        assert!(format_datetime(&a) < format_datetime(&b));
    }

    #[test]
    fn parses_sqlite_default_format() {
        let dt = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(format_datetime(&dt), "2026-02-09T14:30:00.000000Z");
    }

    #[test]
    fn rejects_garbage_datetime() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(DatabaseError::Query(_))
        ));
    }

    #[test]
    fn string_list_handles_empty_and_json() {
        assert!(parse_string_list("").unwrap().is_empty());
        assert_eq!(
            parse_string_list(r#"["flour","eggs"]"#).unwrap(),
            vec!["flour".to_string(), "eggs".to_string()]
        );
        assert!(parse_string_list("{").is_err());
    }

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("soup"), "soup");
    }

    #[test]
    fn placeholders_are_numbered() {
        assert_eq!(placeholders(1, 3), "?1, ?2, ?3");
        assert_eq!(placeholders(4, 1), "?4");
        assert_eq!(placeholders(1, 0), "");
    }
}
