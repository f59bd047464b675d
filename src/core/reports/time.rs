use super::Report;
use crate::core::stats::mode;
use crate::models::{Filter, TripTable};
use crate::utils::date::weekday_name;
use chrono::{Month, Weekday};
use std::io::{self, Write};

/// Most frequent times of travel. Month and day are skipped when the
/// table was already filtered on them.
#[derive(Debug, PartialEq, Eq)]
pub struct TimeReport {
    pub month: Option<Month>,
    pub day: Option<Weekday>,
    pub hour: Option<u32>,
}

impl TimeReport {
    pub fn compute(table: &TripTable, filter: &Filter) -> Self {
        let trips = table.trips();
        Self {
            month: filter
                .month
                .is_none()
                .then(|| mode(trips.iter().map(|t| t.month)))
                .flatten(),
            day: filter
                .day
                .is_none()
                .then(|| mode(trips.iter().map(|t| t.weekday)))
                .flatten(),
            hour: mode(trips.iter().map(|t| t.hour)),
        }
    }
}

impl Report for TimeReport {
    const TITLE: &'static str = "Calculating The Most Frequent Times of Travel...";

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(month) = self.month {
            writeln!(out, "Most Popular Month For Traveling: {}", month.name())?;
        }
        if let Some(day) = self.day {
            writeln!(out, "Most Popular Day For Traveling: {}", weekday_name(day))?;
        }
        match self.hour {
            Some(hour) => writeln!(out, "Most Popular Hour to Start Traveling: {hour}"),
            None => writeln!(out, "No trips match the selected filters."),
        }
    }
}
