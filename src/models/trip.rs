use super::city::City;
use super::filter::Filter;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{month_of, parse_timestamp};
use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};
use serde::Deserialize;

/// One CSV row as it appears in the dataset files.
#[derive(Debug, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time", default)]
    pub end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub row: usize,                      // 0-based position in the source file
    pub start_time: NaiveDateTime,       // ⇔ "Start Time"
    pub end_time: Option<NaiveDateTime>, // ⇔ "End Time"
    pub trip_duration: f64,              // ⇔ "Trip Duration" (seconds)
    pub start_station: String,           // ⇔ "Start Station"
    pub end_station: String,             // ⇔ "End Station"
    pub user_type: Option<String>,       // ⇔ "User Type"
    pub gender: Option<String>,          // ⇔ "Gender" (not in every city)
    pub birth_year: Option<f64>,         // ⇔ "Birth Year" (not in every city)

    // derived from start_time at load
    pub month: Month,
    pub weekday: Weekday,
    pub hour: u32,
}

impl Trip {
    /// Build a typed trip from a raw CSV row, deriving the calendar columns.
    /// `line` is only used for error reporting.
    pub fn from_raw(row: usize, raw: RawTrip, line: u64) -> AppResult<Self> {
        let start_time =
            parse_timestamp(&raw.start_time).ok_or_else(|| AppError::InvalidTimestamp {
                line,
                value: raw.start_time.clone(),
            })?;

        let end_time = raw.end_time.as_deref().and_then(|s| {
            let parsed = parse_timestamp(s);
            if parsed.is_none() {
                log::debug!("line {line}: ignoring unparseable end time {s:?}");
            }
            parsed
        });

        Ok(Self {
            row,
            start_time,
            end_time,
            trip_duration: raw.trip_duration,
            start_station: raw.start_station,
            end_station: raw.end_station,
            user_type: non_blank(raw.user_type),
            gender: non_blank(raw.gender),
            birth_year: raw.birth_year,
            month: month_of(&start_time),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// In-memory trips for one city, optionally narrowed by a filter.
#[derive(Debug, Clone)]
pub struct TripTable {
    pub city: City,
    trips: Vec<Trip>,
}

impl TripTable {
    pub fn new(city: City, trips: Vec<Trip>) -> Self {
        Self { city, trips }
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Keep only the rows matching `filter`, preserving file order.
    pub fn filtered(self, filter: &Filter) -> Self {
        let trips = self.trips.into_iter().filter(|t| filter.matches(t)).collect();
        Self {
            city: self.city,
            trips,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Build a trip from the handful of fields the statistics look at.
    pub fn trip(row: usize, start: &str, duration: f64, from: &str, to: &str) -> Trip {
        let raw = RawTrip {
            start_time: start.to_string(),
            end_time: None,
            trip_duration: duration,
            start_station: from.to_string(),
            end_station: to.to_string(),
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
        };
        Trip::from_raw(row, raw, row as u64 + 2).expect("fixture timestamp")
    }
}
