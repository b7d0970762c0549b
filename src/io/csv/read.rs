//! CSV reading operations.

use std::{io::Cursor, sync::Arc};

use anyhow::{Context, Result, bail, ensure};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, CsvReader, DataType, Field, Schema, SchemaRef}};

use crate::data::Location;

const PROVINCE: &str = "Province";
const CITY: &str = "City";
const LATITUDE: &str = "Latitude";
const LONGITUDE: &str = "Longitude";

/// Read the location table (`Province,City,Latitude,Longitude`) from CSV bytes.
/// Coordinates are coerced to numbers; rows keep their file order.
pub(crate) fn read_locations_csv(bytes: &[u8]) -> Result<Vec<Location>> {
    let options = CsvReadOptions::default()
        .with_has_header(true)
        .with_schema_overwrite(Some(location_csv_schema()));

    let df = CsvReader::new(Cursor::new(bytes))
        .with_options(options)
        .finish()
        .context("[io::csv::read] Failed to read location CSV from bytes")?;

    locations_from_frame(&df)
}

/// Schema overwrite for the location table.
fn location_csv_schema() -> SchemaRef {
    Arc::new(Schema::from_iter([
        Field::new(PROVINCE.into(), DataType::String),
        Field::new(CITY.into(), DataType::String),
        Field::new(LATITUDE.into(), DataType::Float64),
        Field::new(LONGITUDE.into(), DataType::Float64),
    ]))
}

fn locations_from_frame(df: &DataFrame) -> Result<Vec<Location>> {
    ensure!(df.width() >= 4, "[io::csv::read] location CSV must have columns: {PROVINCE},{CITY},{LATITUDE},{LONGITUDE}");

    let column = |name: &str| df.column(name)
        .with_context(|| format!("[io::csv::read] location CSV is missing column {name:?}"));

    let provinces = column(PROVINCE)?.cast(&DataType::String)?;
    let cities = column(CITY)?.cast(&DataType::String)?;
    let latitudes = column(LATITUDE)?.cast(&DataType::Float64)?;
    let longitudes = column(LONGITUDE)?.cast(&DataType::Float64)?;

    provinces.str()?.into_iter()
        .zip(cities.str()?.into_iter())
        .zip(latitudes.f64()?.into_iter())
        .zip(longitudes.f64()?.into_iter())
        .enumerate()
        .map(|(row, (((province, city), lat), lon))| {
            // +2: one for the header, one for 1-based line numbers
            let line = row + 2;
            let (Some(province), Some(city)) = (province, city) else {
                bail!("[io::csv::read] line {line}: province and city are required");
            };
            let (Some(lat), Some(lon)) = (lat, lon) else {
                bail!("[io::csv::read] line {line}: latitude/longitude are not numbers");
            };
            Ok(Location::new(province.trim(), city.trim(), lat, lon))
        })
        .collect()
}
