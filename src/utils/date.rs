//! Calendar helpers: English month/weekday names and start-time parsing.

use chrono::{Datelike, Month, NaiveDateTime, Weekday};

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Months a user can filter on. The datasets cover the first half of the year.
pub const FILTER_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Monday-first week.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

pub fn month_of<D: Datelike>(d: &D) -> Month {
    // month0() is always in 0..12
    MONTHS[d.month0() as usize]
}

/// Full English weekday name ("Monday" .. "Sunday").
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a full month name, case-insensitive, restricted to FILTER_MONTHS.
pub fn parse_filter_month(s: &str) -> Option<Month> {
    let s = s.trim();
    FILTER_MONTHS
        .iter()
        .copied()
        .find(|m| m.name().eq_ignore_ascii_case(s))
}

/// Parse a full weekday name, case-insensitive.
pub fn parse_weekday(s: &str) -> Option<Weekday> {
    let s = s.trim();
    WEEKDAYS
        .iter()
        .copied()
        .find(|d| weekday_name(*d).eq_ignore_ascii_case(s))
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn parses_dataset_timestamps() {
        let ts = parse_timestamp("2017-06-23 15:09:32").expect("valid timestamp");
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2017, 6, 23).expect("date"));
        assert_eq!(ts.hour(), 15);

        assert!(parse_timestamp("2017-01-01 00:07:57.123").is_some());
        assert!(parse_timestamp("2017-01-01T00:07:57").is_some());
        assert!(parse_timestamp("01/01/2017 00:07").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn month_names_are_full_english() {
        let d = NaiveDate::from_ymd_opt(2017, 3, 6).expect("date");
        assert_eq!(month_of(&d), Month::March);
        assert_eq!(month_of(&d).name(), "March");
    }

    #[test]
    fn weekday_names_are_pinned() {
        let names: Vec<&str> = WEEKDAYS.iter().map(|d| weekday_name(*d)).collect();
        assert_eq!(
            names,
            [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday"
            ]
        );
    }

    #[test]
    fn filter_month_accepts_only_first_half_of_year() {
        assert_eq!(parse_filter_month("january"), Some(Month::January));
        assert_eq!(parse_filter_month("JUNE"), Some(Month::June));
        assert_eq!(parse_filter_month("july"), None);
        assert_eq!(parse_filter_month("jan"), None);
    }

    #[test]
    fn weekday_parse_is_case_insensitive() {
        assert_eq!(parse_weekday("Sunday"), Some(Weekday::Sun));
        assert_eq!(parse_weekday(" wednesday "), Some(Weekday::Wed));
        assert_eq!(parse_weekday("wed"), None);
    }
}
