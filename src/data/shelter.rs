use serde::{Deserialize, Serialize};

use crate::io::de_opt_string_or_number;

/// A designated evacuation site.
///
/// The bundled file uses `lat`/`long` for coordinates and may leave the
/// descriptive fields `null`; both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "long", alias = "lng")]
    pub longitude: f64,
    #[serde(default, deserialize_with = "de_opt_string_or_number")]
    pub capacity: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl Shelter {
    /// Coordinates as a point (x = longitude, y = latitude).
    #[inline] pub fn point(&self) -> geo::Point<f64> { geo::Point::new(self.longitude, self.latitude) }

    /// Display name, falling back to "N/A".
    #[inline] pub fn display_name(&self) -> &str { self.name.as_deref().unwrap_or("N/A") }
}
