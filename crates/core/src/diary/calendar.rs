//! Calendar helpers shared by the indexer and the comparison table.

use chrono::{Datelike, NaiveDate};

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Every date from Jan 1 through Dec 31 of `year`.
///
/// Empty for years chrono cannot represent.
pub fn year_dates(year: i32) -> Vec<NaiveDate> {
    let (Some(start), Some(end)) =
        (NaiveDate::from_ymd_opt(year, 1, 1), NaiveDate::from_ymd_opt(year, 12, 31))
    else {
        return Vec::new();
    };
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// `YYYY-MM-DD`, the daily-note naming scheme.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `MM-DD`, the row label of the comparison table.
pub fn day_key(date: NaiveDate) -> String {
    format!("{:02}-{:02}", date.month(), date.day())
}

/// The 366 table rows, Jan 1 through Dec 31 including Feb 29.
pub fn calendar_days() -> Vec<String> {
    // 2020 is a leap year, so Feb 29 gets a row
    year_dates(2020).into_iter().map(day_key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2000, true)]
    #[case(2400, true)]
    #[case(2024, true)]
    #[case(1900, false)]
    #[case(2100, false)]
    #[case(2023, false)]
    fn test_leap_years(#[case] year: i32, #[case] leap: bool) {
        assert_eq!(is_leap_year(year), leap);
        assert_eq!(year_dates(year).len() as u32, days_in_year(year));
    }

    #[test]
    fn test_year_dates_bounds() {
        let dates = year_dates(2023);
        assert_eq!(date_key(dates[0]), "2023-01-01");
        assert_eq!(date_key(*dates.last().unwrap()), "2023-12-31");
    }

    #[test]
    fn test_calendar_days_has_leap_day() {
        let days = calendar_days();
        assert_eq!(days.len(), 366);
        assert_eq!(days[0], "01-01");
        assert_eq!(days[59], "02-29");
        assert_eq!(days[365], "12-31");
    }
}
