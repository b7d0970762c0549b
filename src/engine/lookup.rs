use ahash::AHashSet;

use crate::data::{Location, Shelter};
use super::filter::contains_ignore_case;

/// Coordinates of the first location whose province and city match exactly.
/// Returns `None` if either selection is empty or nothing matches.
pub fn resolve_map_center(locations: &[Location], province: &str, city: &str) -> Option<geo::Point<f64>> {
    if province.is_empty() || city.is_empty() { return None }
    locations.iter()
        .find(|loc| &*loc.province == province && &*loc.city == city)
        .map(Location::point)
}

/// Shelters whose `city` field contains `city` (case-insensitive), in file order.
pub fn shelters_for_city<'a>(shelters: &'a [Shelter], city: &str) -> impl Iterator<Item = &'a Shelter> {
    shelters.iter().filter(move |shelter| {
        shelter.city.as_deref().is_some_and(|name| contains_ignore_case(name, city))
    })
}

/// Number of shelters serving `city`; 0 for an empty city.
pub fn count_shelters_for_city(shelters: &[Shelter], city: &str) -> usize {
    shelters_for_city(shelters, city).count()
}

/// Distinct provinces, in file order.
pub fn provinces(locations: &[Location]) -> Vec<&str> {
    let mut seen = AHashSet::new();
    locations.iter()
        .map(|loc| &*loc.province)
        .filter(|province| seen.insert(*province))
        .collect()
}

/// Distinct cities of `province`, in file order.
pub fn cities_in_province<'a>(locations: &'a [Location], province: &str) -> Vec<&'a str> {
    let mut seen = AHashSet::new();
    locations.iter()
        .filter(|loc| &*loc.province == province)
        .map(|loc| &*loc.city)
        .filter(|city| seen.insert(*city))
        .collect()
}

/// Residents per shelter. `None` when population is unknown or there are no shelters.
pub fn population_per_shelter(population: Option<u64>, shelter_count: usize) -> Option<f64> {
    match (population, shelter_count) {
        (Some(population), count) if count > 0 => Some(population as f64 / count as f64),
        _ => None,
    }
}
