use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};

/// Reads a JSON array of records from bytes.
pub(crate) fn read_json_records<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>> {
    serde_json::from_slice(bytes).context("[io::json] Failed to decode JSON record array")
}

/// Accepts a string, a number, or null; numbers are kept as their decimal text.
pub(crate) fn de_opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}

#[derive(Serialize)]
struct LatLon {
    lat: f64,
    lon: f64,
}

/// Serializes a point as `{"lat": y, "lon": x}`.
pub(crate) fn ser_point<S: Serializer>(point: &geo::Point<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    LatLon { lat: point.y(), lon: point.x() }.serialize(serializer)
}

/// Serializes an optional point as `{"lat": y, "lon": x}` or `null`.
pub(crate) fn ser_opt_point<S: Serializer>(point: &Option<geo::Point<f64>>, serializer: S) -> Result<S::Ok, S::Error> {
    point.map(|p| LatLon { lat: p.y(), lon: p.x() }).serialize(serializer)
}

/// Parse a count that may be a JSON number or a digit string such as "1,846,513".
pub(crate) fn parse_count(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::Number(n) => n.as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f.round() as u64)),
        serde_json::Value::String(s) => {
            let digits: String = s.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
            digits.parse().ok()
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Shelter;
    use serde_json::json;

    #[test]
    fn shelter_capacity_accepts_text_number_and_null() {
        let shelters: Vec<Shelter> = read_json_records(br#"[
            {"name": "Gym", "lat": 14.5, "long": 121.0, "capacity": "200", "city": "Manila City", "type": "School"},
            {"name": null, "lat": 14.6, "long": 121.1, "capacity": 150, "city": null, "type": null},
            {"lat": 14.7, "long": 121.2}
        ]"#).unwrap();

        assert_eq!(shelters[0].capacity.as_deref(), Some("200"));
        assert_eq!(shelters[0].kind.as_deref(), Some("School"));
        assert_eq!(shelters[1].capacity.as_deref(), Some("150"));
        assert_eq!(shelters[1].display_name(), "N/A");
        assert_eq!(shelters[2].capacity, None);
        assert_eq!(shelters[2].city, None);
    }

    #[test]
    fn non_array_is_an_error() {
        assert!(read_json_records::<Shelter>(br#"{"name": "Gym"}"#).is_err());
    }

    #[test]
    fn parse_count_variants() {
        assert_eq!(parse_count(&json!(1846513)), Some(1_846_513));
        assert_eq!(parse_count(&json!("1,846,513")), Some(1_846_513));
        assert_eq!(parse_count(&json!(" 42 ")), Some(42));
        assert_eq!(parse_count(&json!(12.6)), Some(13));
        assert_eq!(parse_count(&json!("n/a")), None);
        assert_eq!(parse_count(&json!(-5)), None);
        assert_eq!(parse_count(&json!(null)), None);
    }
}
