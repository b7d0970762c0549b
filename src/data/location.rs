use std::sync::Arc;

use serde::Serialize;

/// A geocoded (province, city) pair from the bundled location table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub province: Arc<str>,
    pub city: Arc<str>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(province: &str, city: &str, latitude: f64, longitude: f64) -> Self {
        Self { province: Arc::from(province), city: Arc::from(city), latitude, longitude }
    }

    /// Coordinates as a point (x = longitude, y = latitude).
    #[inline] pub fn point(&self) -> geo::Point<f64> { geo::Point::new(self.longitude, self.latitude) }
}
