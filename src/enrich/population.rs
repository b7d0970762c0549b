use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::engine::contains_ignore_case;
use crate::io::parse_count;
use super::{Fetcher, PopulationConfig};

/// Which population endpoint an answer came from. City-level answers win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopulationLevel {
    City,
    Municipality,
}

impl PopulationLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            PopulationLevel::City => "city",
            PopulationLevel::Municipality => "municipality",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "city" => Some(PopulationLevel::City),
            "municipality" => Some(PopulationLevel::Municipality),
            _ => None,
        }
    }

    /// Lookup order.
    pub fn order() -> [PopulationLevel; 2] { [PopulationLevel::City, PopulationLevel::Municipality] }
}

/// A named place with a population figure, as returned by a demographic endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopulationRecord {
    pub name: String,
    pub population: u64,
}

/// Collect every object carrying a string `name` and a numeric `population`,
/// in document order. Records may be nested in arrays or wrapped in objects;
/// objects without a usable population are skipped.
pub fn population_records(response: &serde_json::Value) -> Vec<PopulationRecord> {
    let mut records = Vec::new();
    collect_records(response, &mut records);
    records
}

fn collect_records(value: &serde_json::Value, out: &mut Vec<PopulationRecord>) {
    match value {
        serde_json::Value::Array(items) => items.iter().for_each(|item| collect_records(item, out)),
        serde_json::Value::Object(fields) => {
            let name = fields.get("name").and_then(|name| name.as_str());
            let population = fields.get("population").and_then(parse_count);
            match (name, population) {
                (Some(name), Some(population)) => out.push(PopulationRecord { name: name.to_string(), population }),
                _ => fields.values().for_each(|field| collect_records(field, out)),
            }
        }
        _ => {}
    }
}

/// Population of the first record whose name contains `city` (case-insensitive).
pub fn match_population(records: &[PopulationRecord], city: &str) -> Option<u64> {
    records.iter()
        .find(|record| contains_ignore_case(&record.name, city))
        .map(|record| record.population)
}

fn lookup(fetcher: &dyn Fetcher, url: &str, city: &str) -> Result<Option<u64>> {
    let response = fetcher.get_json(url, &[])?;
    let records = population_records(&response);
    debug!(url, records = records.len(), "[enrich::population] fetched records");
    Ok(match_population(&records, city))
}

/// Population of `city`, preferring the city-level endpoint over the
/// municipality-level one. Failures are logged and treated as "no match";
/// an empty city returns `None` without any request.
pub fn fetch_population_for_city(fetcher: &dyn Fetcher, config: &PopulationConfig, city: &str) -> Option<u64> {
    if city.trim().is_empty() { return None }

    let endpoints = PopulationLevel::order().map(|level| (level, config.url(level)));
    if endpoints.iter().all(|(_, url)| url.is_none()) {
        warn!("[enrich::population] no population endpoints configured");
        return None;
    }

    for (level, url) in endpoints {
        let Some(url) = url else { continue };
        match lookup(fetcher, url, city) {
            Ok(Some(population)) => {
                debug!(city, level = level.to_str(), population, "[enrich::population] matched");
                return Some(population);
            }
            Ok(None) => {}
            Err(e) => warn!(city, level = level.to_str(), "[enrich::population] Error fetching population: {e:#}"),
        }
    }
    None
}
