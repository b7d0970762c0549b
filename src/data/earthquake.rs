use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded earthquake event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Earthquake {
    /// Event time in milliseconds since the Unix epoch.
    pub datetime: i64,
    /// Depth in kilometers.
    #[serde(default)]
    pub depth: f64,
    pub magnitude: f64,
    /// Free-text place description, e.g. "012 km N 45° W of Manila City (Metro Manila)".
    #[serde(default)]
    pub location: String,
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "long", alias = "lng")]
    pub longitude: f64,
}

impl Earthquake {
    /// Coordinates as a point (x = longitude, y = latitude).
    #[inline] pub fn point(&self) -> geo::Point<f64> { geo::Point::new(self.longitude, self.latitude) }

    /// Event time as a UTC timestamp, if the millisecond value is representable.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.datetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_bundled_field_names() {
        let json = r#"{"datetime": 1704067200000, "depth": 10.5, "magnitude": 4.2,
                       "location": "Manila", "lat": 14.6, "long": 121.0}"#;
        let eq: Earthquake = serde_json::from_str(json).unwrap();
        assert_eq!(eq.datetime, 1_704_067_200_000);
        assert_eq!(eq.latitude, 14.6);
        assert_eq!(eq.longitude, 121.0);
        assert_eq!(eq.timestamp().unwrap().format("%Y-%m-%d").to_string(), "2024-01-01");
    }
}
