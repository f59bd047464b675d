//! Dataset loading: city → CSV file → typed trips → filtered table.

use crate::errors::{AppError, AppResult};
use crate::models::trip::RawTrip;
use crate::models::{City, Filter, Trip, TripTable};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

pub fn dataset_path(data_dir: &Path, city: City) -> PathBuf {
    data_dir.join(city.file_name())
}

/// Parse every trip in a CSV stream, keeping file order.
pub fn read_trips<R: Read>(reader: R) -> AppResult<Vec<Trip>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut trips = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        let raw: RawTrip = record.deserialize(Some(&headers))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        trips.push(Trip::from_raw(row, raw, line)?);
    }
    Ok(trips)
}

/// Read a whole city file into a table.
pub fn load_city(data_dir: &Path, city: City) -> AppResult<TripTable> {
    let path = dataset_path(data_dir, city);
    let file = File::open(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AppError::DatasetNotFound(path.clone()),
        _ => AppError::Io(e),
    })?;

    let trips = read_trips(file)?;
    log::info!("loaded {} trips from {}", trips.len(), path.display());
    Ok(TripTable::new(city, trips))
}

/// Load the city selected in `filter` and apply its month/day conditions.
pub fn load_data(data_dir: &Path, filter: &Filter) -> AppResult<TripTable> {
    let table = load_city(data_dir, filter.city)?.filtered(filter);
    log::info!("{} trips match {}", table.len(), filter.describe());
    Ok(table)
}
