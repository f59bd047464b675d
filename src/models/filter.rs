use super::city::City;
use super::trip::Trip;
use crate::utils::date::weekday_name;
use chrono::{Month, Weekday};

/// Filters chosen for one session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl Filter {
    pub fn new(city: City) -> Self {
        Self {
            city,
            month: None,
            day: None,
        }
    }

    pub fn with_month(mut self, month: Option<Month>) -> Self {
        self.month = month;
        self
    }

    pub fn with_day(mut self, day: Option<Weekday>) -> Self {
        self.day = day;
        self
    }

    /// Month and day conditions are combined with AND; an unset one always matches.
    pub fn matches(&self, trip: &Trip) -> bool {
        self.month.is_none_or(|m| trip.month == m) && self.day.is_none_or(|d| trip.weekday == d)
    }

    pub fn describe(&self) -> String {
        format!(
            "{} | month: {} | day: {}",
            self.city.label(),
            self.month.map(|m| m.name()).unwrap_or("all"),
            self.day.map(weekday_name).unwrap_or("all"),
        )
    }
}
