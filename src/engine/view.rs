use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::data::{Dataset, Earthquake};
use crate::enrich::PopulationLevel;
use crate::io::ser_opt_point;
use super::{
    filter::{filter_earthquakes_by_city_and_magnitude, MAX_EARTHQUAKES},
    lookup::{count_shelters_for_city, population_per_shelter, resolve_map_center},
    selection::{RequestTag, Selection},
};

/// Everything the page shows for the current selection.
/// Always computed from a `Selection` and the static data, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedView<'a> {
    pub filtered_earthquakes: Vec<&'a Earthquake>,
    #[serde(serialize_with = "ser_opt_point")]
    pub map_center: Option<geo::Point<f64>>,
    pub shelter_count: usize,
    pub population: Option<u64>,
    pub population_per_shelter: Option<f64>,
}

/// Compute the derived view for `selection`.
/// `population` is the externally fetched figure for the selected city, if any.
/// An incomplete place selection yields an empty view.
pub fn derive_view<'a>(dataset: &'a Dataset, selection: &Selection, population: Option<u64>) -> DerivedView<'a> {
    if !selection.is_place_selected() {
        return DerivedView {
            filtered_earthquakes: Vec::new(),
            map_center: None,
            shelter_count: 0,
            population: None,
            population_per_shelter: None,
        };
    }

    let city = selection.city();
    let shelter_count = count_shelters_for_city(dataset.shelters(), city);

    DerivedView {
        filtered_earthquakes: filter_earthquakes_by_city_and_magnitude(
            dataset.earthquakes(), city, selection.magnitude(), MAX_EARTHQUAKES,
        ),
        map_center: resolve_map_center(dataset.locations(), selection.province(), city),
        shelter_count,
        population,
        population_per_shelter: population_per_shelter(population, shelter_count),
    }
}

/// A lookup to run against an external service on behalf of the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentRequest {
    pub tag: RequestTag,
    pub query: String,
}

/// Population answers received so far for one place, per endpoint level.
/// A match is never replaced by a miss; the city-level match wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PopulationAnswers {
    city: Option<u64>,
    municipality: Option<u64>,
}

impl PopulationAnswers {
    fn record(&mut self, level: PopulationLevel, population: Option<u64>) {
        let slot = match level {
            PopulationLevel::City => &mut self.city,
            PopulationLevel::Municipality => &mut self.municipality,
        };
        if population.is_some() { *slot = population }
    }

    #[inline] fn resolved(&self) -> Option<u64> { self.city.or(self.municipality) }
}

/// Owns the selection and the externally fetched values for it.
///
/// Callers issue the requests returned by `population_request` / `image_request`
/// however they like (blocking, on a worker, from JS) and hand the results back
/// with the request's tag. Results for a superseded selection are dropped.
/// Population answers may arrive per endpoint level in any order.
#[derive(Debug, Clone)]
pub struct Explorer {
    dataset: Arc<Dataset>,
    selection: Selection,
    population: Option<(RequestTag, PopulationAnswers)>,
    image: Option<(RequestTag, Option<String>)>,
}

impl Explorer {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset, selection: Selection::new(), population: None, image: None }
    }

    #[inline] pub fn dataset(&self) -> &Dataset { &self.dataset }
    #[inline] pub fn selection(&self) -> &Selection { &self.selection }

    /// Choose a province; the city selection is cleared.
    pub fn select_province(&mut self, province: impl Into<String>) { self.selection.set_province(province) }

    pub fn select_city(&mut self, city: impl Into<String>) { self.selection.set_city(city) }

    pub fn set_magnitude(&mut self, magnitude: f64) { self.selection.set_magnitude(magnitude) }

    /// Population lookup for the selected city, or `None` if no place is selected.
    pub fn population_request(&self) -> Option<EnrichmentRequest> {
        self.selection.is_place_selected().then(|| EnrichmentRequest {
            tag: self.selection.tag(),
            query: self.selection.city().to_string(),
        })
    }

    /// Image lookup for the selected place, or `None` if no place is selected.
    pub fn image_request(&self) -> Option<EnrichmentRequest> {
        self.selection.is_place_selected().then(|| EnrichmentRequest {
            tag: self.selection.tag(),
            query: format!("{}, {}", self.selection.city(), self.selection.province()),
        })
    }

    /// Record the outcome of a complete lookup (as from `fetch_population_for_city`).
    /// Returns false (and keeps nothing) if the selection has changed since the
    /// request was issued.
    pub fn accept_population(&mut self, tag: RequestTag, population: Option<u64>) -> bool {
        self.accept_population_level(tag, PopulationLevel::City, population)
    }

    /// Record one endpoint's answer; `None` means no match or a failed request.
    /// A city-level match takes precedence over a municipality-level one, and a
    /// miss never clears a match already recorded for the same selection.
    pub fn accept_population_level(&mut self, tag: RequestTag, level: PopulationLevel, population: Option<u64>) -> bool {
        if tag != self.selection.tag() {
            debug!(?tag, current = ?self.selection.tag(), level = level.to_str(),
                "[engine::view] dropping stale population response");
            return false;
        }
        if !matches!(self.population, Some((held, _)) if held == tag) {
            self.population = Some((tag, PopulationAnswers::default()));
        }
        if let Some((_, answers)) = &mut self.population { answers.record(level, population) }
        true
    }

    /// Record an image result; stale results are dropped as for population.
    pub fn accept_image(&mut self, tag: RequestTag, link: Option<String>) -> bool {
        if tag != self.selection.tag() {
            debug!(?tag, current = ?self.selection.tag(), "[engine::view] dropping stale image response");
            return false;
        }
        self.image = Some((tag, link));
        true
    }

    /// Population accepted for the current selection.
    pub fn population(&self) -> Option<u64> {
        self.population.as_ref()
            .filter(|(tag, _)| *tag == self.selection.tag())
            .and_then(|(_, answers)| answers.resolved())
    }

    /// Image link accepted for the current selection.
    pub fn image(&self) -> Option<&str> {
        self.image.as_ref()
            .filter(|(tag, _)| *tag == self.selection.tag())
            .and_then(|(_, link)| link.as_deref())
    }

    /// The derived view for the current selection.
    pub fn view(&self) -> DerivedView<'_> {
        derive_view(&self.dataset, &self.selection, self.population())
    }
}
