use super::Report;
use crate::core::stats::{mode, most_common_pair};
use crate::models::TripTable;
use std::io::{self, Write};

#[derive(Debug, PartialEq, Eq)]
pub struct StationReport {
    pub start: Option<String>,
    pub end: Option<String>,
    /// (start, end, trips)
    pub trip: Option<(String, String, usize)>,
}

impl StationReport {
    pub fn compute(table: &TripTable) -> Self {
        let trips = table.trips();
        let trip = most_common_pair(
            trips
                .iter()
                .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
        )
        .map(|((from, to), n)| (from.to_string(), to.to_string(), n));

        Self {
            start: mode(trips.iter().map(|t| t.start_station.as_str())).map(str::to_string),
            end: mode(trips.iter().map(|t| t.end_station.as_str())).map(str::to_string),
            trip,
        }
    }
}

impl Report for StationReport {
    const TITLE: &'static str = "Calculating The Most Popular Stations and Trip...";

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let (Some(start), Some(end), Some((from, to, _))) = (&self.start, &self.end, &self.trip)
        else {
            return writeln!(out, "No trips match the selected filters.");
        };

        writeln!(out, "Most Popular Station To Start From: {start}")?;
        writeln!(out, "Most Popular Station to End At: {end}")?;
        writeln!(out, "Most Popular Trip: {from} -> {to}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;
    use crate::models::trip::fixtures::trip;

    #[test]
    fn popular_stations_and_trip() {
        let table = TripTable::new(
            City::Chicago,
            vec![
                trip(0, "2017-06-05 08:10:00", 1.0, "Canal St", "Clark St"),
                trip(1, "2017-06-05 08:30:00", 1.0, "Clark St", "Navy Pier"),
                trip(2, "2017-06-05 09:00:00", 1.0, "Canal St", "Clark St"),
                trip(3, "2017-06-05 09:30:00", 1.0, "Navy Pier", "Navy Pier"),
                trip(4, "2017-06-05 10:00:00", 1.0, "Clark St", "Navy Pier"),
                trip(5, "2017-06-05 10:30:00", 1.0, "Canal St", "Navy Pier"),
            ],
        );

        let r = StationReport::compute(&table);
        assert_eq!(r.start.as_deref(), Some("Canal St"));
        assert_eq!(r.end.as_deref(), Some("Navy Pier"));
        assert_eq!(
            r.trip,
            Some(("Canal St".to_string(), "Clark St".to_string(), 2))
        );

        let mut out = Vec::new();
        r.render(&mut out).expect("write");
        let out = String::from_utf8(out).expect("utf8");
        assert!(out.contains("Most Popular Trip: Canal St -> Clark St"));
    }

    #[test]
    fn empty_table_prints_a_notice() {
        let r = StationReport::compute(&TripTable::new(City::Chicago, Vec::new()));
        let mut out = Vec::new();
        r.render(&mut out).expect("write");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "No trips match the selected filters.\n"
        );
    }
}
