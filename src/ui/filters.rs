//! Questions that build the Filter for one session iteration.

use super::prompt::Prompter;
use crate::errors::AppResult;
use crate::models::{City, Filter};
use crate::utils::date::{parse_filter_month, parse_weekday};
use std::io::{BufRead, Write};

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const CITY_PROMPT: &str = "Would you like to see data for Chicago, New York City or Washington?";
pub const CITY_ERROR: &str = "Please enter a valid city.";
pub const MONTH_GATE: &str = "\nDo you want to filter the data by a specific month? Yes or No";
pub const MONTH_PROMPT: &str = "\nWhich month? January, February, March, April, May or June";
pub const MONTH_ERROR: &str = "Please enter a valid month.";
pub const DAY_GATE: &str = "\nDo you want to filter the data by a day of the week? Yes or No";
pub const DAY_PROMPT: &str =
    "\nWhich day? Monday, Tuesday, Wednesday, Thursday, Friday, Saturday or Sunday";
pub const DAY_ERROR: &str = "Please enter a valid day.";

pub fn get_filters<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    separator: &str,
) -> AppResult<Filter> {
    writeln!(prompter.out(), "{GREETING}")?;

    let city = prompter.ask_until(CITY_PROMPT, CITY_ERROR, City::from_input)?;

    let month = if prompter.ask_yes_no(MONTH_GATE)? {
        Some(prompter.ask_until(MONTH_PROMPT, MONTH_ERROR, parse_filter_month)?)
    } else {
        None
    };

    let day = if prompter.ask_yes_no(DAY_GATE)? {
        Some(prompter.ask_until(DAY_PROMPT, DAY_ERROR, parse_weekday)?)
    } else {
        None
    };

    writeln!(prompter.out(), "{separator}")?;

    let filter = Filter::new(city).with_month(month).with_day(day);
    log::info!("filters selected: {}", filter.describe());
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Month, Weekday};
    use std::io::Cursor;

    fn run(input: &str) -> (Filter, String) {
        let mut p = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let filter = get_filters(&mut p, "----").expect("filters");
        (filter, String::from_utf8(p.into_output()).expect("utf8"))
    }

    #[test]
    fn no_filters() {
        let (filter, out) = run("Chicago\nno\nno\n");
        assert_eq!(filter, Filter::new(City::Chicago));
        assert!(out.starts_with(GREETING));
        assert!(out.trim_end().ends_with("----"));
    }

    #[test]
    fn month_and_day() {
        let (filter, _) = run("washington\nyes\nMarch\nyes\nfriday\n");
        assert_eq!(filter.city, City::Washington);
        assert_eq!(filter.month, Some(Month::March));
        assert_eq!(filter.day, Some(Weekday::Fri));
    }

    #[test]
    fn invalid_answers_are_skipped() {
        let (filter, out) = run("boston\nnew york city\nperhaps\nyes\njuly\njune\nno\n");
        assert_eq!(
            filter,
            Filter::new(City::NewYorkCity).with_month(Some(Month::June))
        );
        assert_eq!(out.matches(CITY_ERROR).count(), 1);
        assert_eq!(out.matches(MONTH_ERROR).count(), 1);
        assert_eq!(out.matches("Please enter Yes or No").count(), 1);
    }
}
