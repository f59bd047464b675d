use super::Report;
use crate::models::TripTable;
use crate::utils::secs2readable;
use std::io::{self, Write};

/// Total and mean trip duration, truncated to whole seconds.
#[derive(Debug, PartialEq, Eq)]
pub struct DurationReport {
    pub total: i64,
    pub mean: Option<i64>,
}

impl DurationReport {
    pub fn compute(table: &TripTable) -> Self {
        let trips = table.trips();
        let sum: f64 = trips.iter().map(|t| t.trip_duration).sum();
        let mean = (!trips.is_empty()).then(|| (sum / trips.len() as f64) as i64);

        Self {
            total: sum as i64,
            mean,
        }
    }
}

impl Report for DurationReport {
    const TITLE: &'static str = "Calculating Trip Duration...";

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Total Travel Time: {}", secs2readable(self.total))?;
        match self.mean {
            Some(mean) => writeln!(out, "Average Travel Time: {}", secs2readable(mean)),
            None => writeln!(out, "Average Travel Time: n/a"),
        }
    }
}
