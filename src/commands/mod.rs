pub mod boxscore;
pub mod game;
pub mod preview;
pub mod schedule;
pub mod scoreboard;

use chrono::{Days, NaiveDate};
use thiserror::Error;

/// Formats accepted by `--date`, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Date is invalid: '{0}'")]
    Invalid(String),

    #[error("Can't find any option. Use --date, --today, --tomorrow or --yesterday")]
    MissingOption,
}

/// Which day the user asked for on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSelection {
    Date(String),
    Today,
    Tomorrow,
    Yesterday,
}

impl DateSelection {
    /// Build a selection from the mutually exclusive CLI flags
    pub fn from_flags(
        date: Option<String>,
        today: bool,
        tomorrow: bool,
        yesterday: bool,
    ) -> Result<Self, DateError> {
        if let Some(date) = date {
            Ok(DateSelection::Date(date))
        } else if today {
            Ok(DateSelection::Today)
        } else if tomorrow {
            Ok(DateSelection::Tomorrow)
        } else if yesterday {
            Ok(DateSelection::Yesterday)
        } else {
            Err(DateError::MissingOption)
        }
    }

    /// Turn the selection into a calendar date, relative to `today`
    pub fn resolve(&self, today: NaiveDate) -> Result<NaiveDate, DateError> {
        match self {
            DateSelection::Date(s) => parse_date(s),
            DateSelection::Today => Ok(today),
            DateSelection::Tomorrow => today
                .checked_add_days(Days::new(1))
                .ok_or_else(|| DateError::Invalid(today.to_string())),
            DateSelection::Yesterday => today
                .checked_sub_days(Days::new(1))
                .ok_or_else(|| DateError::Invalid(today.to_string())),
        }
    }
}

/// Parse a user supplied date
///
/// Accepts YYYY-MM-DD, YYYY/MM/DD, YYYYMMDD, MM/DD/YYYY and "January 5, 2018".
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    let s = input.trim();

    if s.len() == 8 && s.chars().all(|c| c.is_ascii_digit()) {
        let dashed = format!("{}-{}-{}", &s[0..4], &s[4..6], &s[6..8]);
        return NaiveDate::parse_from_str(&dashed, "%Y-%m-%d")
            .map_err(|_| DateError::Invalid(input.to_string()));
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| DateError::Invalid(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolve_today_tomorrow_yesterday() {
        let today = date(2018, 3, 1);
        assert_eq!(DateSelection::Today.resolve(today), Ok(today));
        assert_eq!(DateSelection::Tomorrow.resolve(today), Ok(date(2018, 3, 2)));
        assert_eq!(DateSelection::Yesterday.resolve(today), Ok(date(2018, 2, 28)));
    }

    #[test]
    fn test_resolve_crosses_year_boundary() {
        let today = date(2017, 12, 31);
        assert_eq!(DateSelection::Tomorrow.resolve(today), Ok(date(2018, 1, 1)));
        assert_eq!(
            DateSelection::Yesterday.resolve(date(2018, 1, 1)),
            Ok(date(2017, 12, 31))
        );
    }

    #[test]
    fn test_resolve_explicit_date_ignores_today() {
        let selection = DateSelection::Date("2018/01/05".to_string());
        assert_eq!(selection.resolve(date(2020, 6, 6)), Ok(date(2018, 1, 5)));
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = date(2018, 1, 5);
        assert_eq!(parse_date("2018-01-05"), Ok(expected));
        assert_eq!(parse_date("2018/01/05"), Ok(expected));
        assert_eq!(parse_date("20180105"), Ok(expected));
        assert_eq!(parse_date("01/05/2018"), Ok(expected));
        assert_eq!(parse_date("January 5, 2018"), Ok(expected));
        assert_eq!(parse_date(" 2018-1-5 "), Ok(expected));
    }

    #[test]
    fn test_parse_date_invalid() {
        assert_eq!(
            parse_date("not a date"),
            Err(DateError::Invalid("not a date".to_string()))
        );
        assert!(parse_date("2018-02-30").is_err());
        assert!(parse_date("20181345").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(
            DateSelection::from_flags(Some("2018-01-05".to_string()), false, false, false),
            Ok(DateSelection::Date("2018-01-05".to_string()))
        );
        assert_eq!(DateSelection::from_flags(None, true, false, false), Ok(DateSelection::Today));
        assert_eq!(DateSelection::from_flags(None, false, true, false), Ok(DateSelection::Tomorrow));
        assert_eq!(DateSelection::from_flags(None, false, false, true), Ok(DateSelection::Yesterday));
    }

    #[test]
    fn test_from_flags_without_option() {
        assert_eq!(
            DateSelection::from_flags(None, false, false, false),
            Err(DateError::MissingOption)
        );
    }
}
