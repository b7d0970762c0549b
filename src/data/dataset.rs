use std::path::Path;

use anyhow::{ensure, Context, Result};
use tracing::debug;

use crate::io::{read_json_records, read_locations_csv};
use super::{DataSource, DiskSource, Earthquake, Location, Shelter};

/// The static reference data bundled with the application.
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    locations: Vec<Location>,
    shelters: Vec<Shelter>,
    earthquakes: Vec<Earthquake>,
}

impl Dataset {
    pub const LOCATIONS_FILE: &'static str = "locations.csv";
    pub const SHELTERS_FILE: &'static str = "shelters.json";
    pub const EARTHQUAKES_FILE: &'static str = "earthquakes.json";

    /// Every file a data directory must provide.
    pub const FILES: [&'static str; 3] = [Self::LOCATIONS_FILE, Self::SHELTERS_FILE, Self::EARTHQUAKES_FILE];

    pub fn new(locations: Vec<Location>, shelters: Vec<Shelter>, earthquakes: Vec<Earthquake>) -> Self {
        Self { locations, shelters, earthquakes }
    }

    /// Load all three files from a data directory.
    pub fn read_from_dir(path: &Path) -> Result<Self> {
        Self::read_from_source(&DiskSource::new(path))
            .with_context(|| format!("[data::dataset] Failed to load data directory {}", path.display()))
    }

    /// Load all three files from any data source.
    /// Missing files are reported together before anything is parsed.
    pub fn read_from_source(src: &dyn DataSource) -> Result<Self> {
        let missing: Vec<&str> = Self::FILES.into_iter().filter(|name| !src.has(name)).collect();
        ensure!(missing.is_empty(), "[data::dataset] missing data file(s): {}", missing.join(", "));

        let locations = read_locations_csv(&src.get(Self::LOCATIONS_FILE)?)
            .with_context(|| format!("[data::dataset] Failed to parse {}", Self::LOCATIONS_FILE))?;
        let shelters: Vec<Shelter> = read_json_records(&src.get(Self::SHELTERS_FILE)?)
            .with_context(|| format!("[data::dataset] Failed to parse {}", Self::SHELTERS_FILE))?;
        let earthquakes: Vec<Earthquake> = read_json_records(&src.get(Self::EARTHQUAKES_FILE)?)
            .with_context(|| format!("[data::dataset] Failed to parse {}", Self::EARTHQUAKES_FILE))?;

        debug!(
            locations = locations.len(),
            shelters = shelters.len(),
            earthquakes = earthquakes.len(),
            "[data::dataset] loaded reference data"
        );

        Ok(Self { locations, shelters, earthquakes })
    }

    #[inline] pub fn locations(&self) -> &[Location] { &self.locations }
    #[inline] pub fn shelters(&self) -> &[Shelter] { &self.shelters }
    #[inline] pub fn earthquakes(&self) -> &[Earthquake] { &self.earthquakes }
}
