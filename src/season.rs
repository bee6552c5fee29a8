use chrono::{Datelike, NaiveDate};
use std::fmt;
use thiserror::Error;

/// First calendar year the stats API has data for (the 2012-13 season)
pub const EARLIEST_SUPPORTED_YEAR: i32 = 2012;

/// Dates earlier than this month of [`EARLIEST_SUPPORTED_YEAR`] are rejected
pub const EARLIEST_SUPPORTED_MONTH: u32 = 6;

/// First month of a new season; earlier months belong to the season that
/// started the previous year
pub const SEASON_START_MONTH: u32 = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeasonError {
    #[error("Sorry, stats.nba.com doesn't provide season data before 2012-13 (requested {0})")]
    Unsupported(NaiveDate),
}

/// A basketball season, identified by the calendar year it starts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Season {
    start_year: i32,
}

impl Season {
    /// Season a given calendar date falls in
    pub fn for_date(date: NaiveDate) -> Result<Self, SeasonError> {
        let year = date.year();
        let month = date.month();

        if year < EARLIEST_SUPPORTED_YEAR
            || (year == EARLIEST_SUPPORTED_YEAR && month < EARLIEST_SUPPORTED_MONTH)
        {
            return Err(SeasonError::Unsupported(date));
        }

        let start_year = if month >= SEASON_START_MONTH {
            year
        } else {
            year - 1
        };
        Ok(Season { start_year })
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// "YYYY-YY", as the stats API expects it
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.start_year, (self.start_year + 1) % 100)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_october_starts_new_season() {
        let season = Season::for_date(date(2017, 10, 1)).unwrap();
        assert_eq!(season.label(), "2017-18");
        assert_eq!(season.start_year(), 2017);
    }

    #[test]
    fn test_september_belongs_to_previous_season() {
        let season = Season::for_date(date(2017, 9, 30)).unwrap();
        assert_eq!(season.label(), "2016-17");
    }

    #[test]
    fn test_spring_date_belongs_to_previous_season() {
        assert_eq!(Season::for_date(date(2018, 4, 11)).unwrap().label(), "2017-18");
        assert_eq!(Season::for_date(date(2018, 12, 25)).unwrap().label(), "2018-19");
    }

    #[test]
    fn test_suffix_is_zero_padded() {
        assert_eq!(Season::for_date(date(2108, 11, 1)).unwrap().label(), "2108-09");
        assert_eq!(Season::for_date(date(2100, 1, 15)).unwrap().label(), "2099-00");
    }

    #[test]
    fn test_rejects_dates_before_june_2012() {
        assert_eq!(
            Season::for_date(date(2012, 5, 31)),
            Err(SeasonError::Unsupported(date(2012, 5, 31)))
        );
        assert!(Season::for_date(date(2011, 12, 25)).is_err());
        assert!(Season::for_date(date(1999, 11, 2)).is_err());
    }

    #[test]
    fn test_accepts_june_2012() {
        assert_eq!(Season::for_date(date(2012, 6, 1)).unwrap().label(), "2011-12");
        assert_eq!(Season::for_date(date(2012, 10, 30)).unwrap().label(), "2012-13");
    }

    #[test]
    fn test_display_matches_label() {
        let season = Season::for_date(date(2019, 11, 5)).unwrap();
        assert_eq!(season.to_string(), "2019-20");
    }
}
