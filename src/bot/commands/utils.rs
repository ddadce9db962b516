//! Argument parsing shared by several commands.

use crate::errors::{Error, Result};
use chrono::{NaiveDate, Utc};

/// Parses an optional `YYYY-MM-DD` argument, defaulting to today's UTC date.
pub fn parse_date_or_today(raw: Option<&str>) -> Result<NaiveDate> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(Utc::now().date_naive()),
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|e| Error::Config {
            message: format!("Invalid date '{text}' (expected YYYY-MM-DD): {e}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_or_today() {
        let parsed = parse_date_or_today(Some(" 2024-02-29 ")).ok();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 2, 29));

        assert!(parse_date_or_today(None).is_ok());
        assert!(parse_date_or_today(Some("")).is_ok());
        assert!(matches!(
            parse_date_or_today(Some("29/02/2024")),
            Err(Error::Config { .. })
        ));
    }
}
