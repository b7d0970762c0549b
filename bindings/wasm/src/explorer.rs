use std::sync::Arc;

use serde::Serialize;
use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

use sanlilim_core::{
    cities_in_province, image_links, match_population, pick_image_link, population_records, provinces,
    trend_points, Dataset, EarthquakeLayer, EnrichmentRequest, Explorer, ImageSearchConfig, PointId,
    PopulationLevel, RequestTag, ShelterLayer, ShelterSubmission,
};

use crate::common::*;

#[derive(Serialize)]
struct JsRequest<'a> {
    tag: RequestTag,
    query: &'a str,
}

fn request_to_js(request: Option<EnrichmentRequest>) -> Result<JsValue, JsValue> {
    match request {
        Some(req) => to_js(&JsRequest { tag: req.tag, query: &req.query }),
        None => Ok(JsValue::NULL),
    }
}

fn tag_from_js(tag: JsValue) -> Result<RequestTag, JsValue> {
    serde_wasm_bindgen::from_value(tag).map_err(js_err)
}

fn level_from_js(level: &str) -> Result<PopulationLevel, JsValue> {
    PopulationLevel::from_str(level)
        .ok_or_else(|| js_err(format!("Unknown population level {level:?}. Expected one of: city, municipality")))
}

/// Selection state and derived data for the page.
///
/// Lookups are fetched by the page itself: ask for `population_request` /
/// `image_request`, fetch, then pass the raw JSON back with the request's tag.
#[wasm_bindgen]
pub struct WasmExplorer {
    inner: Explorer,
    image_config: ImageSearchConfig,
}

#[wasm_bindgen]
impl WasmExplorer {
    /// files: { "locations.csv": Uint8Array | string, "shelters.json": ..., "earthquakes.json": ... }
    #[wasm_bindgen(constructor)]
    pub fn new(files: JsValue) -> Result<WasmExplorer, JsValue> {
        let mem = js_files_to_memsource(files).map_err(js_err)?;
        let dataset = Dataset::read_from_source(&mem).map_err(js_err)?;
        Ok(WasmExplorer { inner: Explorer::new(Arc::new(dataset)), image_config: ImageSearchConfig::default() })
    }

    pub fn provinces(&self) -> Vec<String> {
        provinces(self.inner.dataset().locations()).into_iter().map(str::to_string).collect()
    }

    pub fn cities(&self, province: &str) -> Vec<String> {
        cities_in_province(self.inner.dataset().locations(), province).into_iter().map(str::to_string).collect()
    }

    pub fn select_province(&mut self, province: String) { self.inner.select_province(province) }
    pub fn select_city(&mut self, city: String) { self.inner.select_city(city) }
    pub fn set_magnitude(&mut self, magnitude: f64) { self.inner.set_magnitude(magnitude) }

    pub fn selection(&self) -> Result<JsValue, JsValue> { to_js(self.inner.selection()) }

    /// Derived view: filtered earthquakes, map center, shelter count, population figures.
    pub fn view(&self) -> Result<JsValue, JsValue> { to_js(&self.inner.view()) }

    /// Chart series for the current earthquake subset, oldest first.
    pub fn trend(&self) -> Result<JsValue, JsValue> {
        to_js(&trend_points(&self.inner.view().filtered_earthquakes))
    }

    pub fn image(&self) -> Option<String> { self.inner.image().map(str::to_string) }

    /// `{ tag, query }` or null when no place is selected.
    pub fn population_request(&self) -> Result<JsValue, JsValue> { request_to_js(self.inner.population_request()) }

    /// `{ tag, query }` or null when no place is selected.
    pub fn image_request(&self) -> Result<JsValue, JsValue> { request_to_js(self.inner.image_request()) }

    /// Apply one population endpoint's response; `level` is "city" or "municipality".
    /// Responses may arrive in any order. Returns false if it was stale.
    pub fn accept_population_response(&mut self, tag: JsValue, level: &str, response: JsValue) -> Result<bool, JsValue> {
        let tag = tag_from_js(tag)?;
        let level = level_from_js(level)?;
        let response = js_json(response).map_err(js_err)?;
        let population = match_population(&population_records(&response), self.inner.selection().city());
        Ok(self.inner.accept_population_level(tag, level, population))
    }

    /// Record that one population endpoint failed. A match from the other level is kept.
    pub fn reject_population(&mut self, tag: JsValue, level: &str) -> Result<bool, JsValue> {
        let tag = tag_from_js(tag)?;
        Ok(self.inner.accept_population_level(tag, level_from_js(level)?, None))
    }

    /// Apply an image search response. Returns false if it was stale.
    pub fn accept_image_response(&mut self, tag: JsValue, response: JsValue) -> Result<bool, JsValue> {
        let tag = tag_from_js(tag)?;
        let response = js_json(response).map_err(js_err)?;
        let link = pick_image_link(&image_links(&response), &self.image_config.excluded_hosts);
        Ok(self.inner.accept_image(tag, link))
    }

    pub fn reject_image(&mut self, tag: JsValue) -> Result<bool, JsValue> {
        Ok(self.inner.accept_image(tag_from_js(tag)?, None))
    }

    /// `{ view: { center, zoom }, points: [...] }` for the shelter map.
    pub fn shelter_layer(&self) -> Result<JsValue, JsValue> {
        let layer = ShelterLayer::new(self.inner.dataset(), self.inner.selection());
        to_js(&serde_json::json!({ "view": layer.view(), "points": layer.points() }))
    }

    /// `{ view: { center, zoom }, points: [...] }` for the earthquake map.
    pub fn earthquake_layer(&self) -> Result<JsValue, JsValue> {
        let layer = EarthquakeLayer::new(self.inner.dataset(), self.inner.selection());
        to_js(&serde_json::json!({ "view": layer.view(), "points": layer.points() }))
    }

    /// Details for a clicked shelter marker, or null.
    pub fn shelter_at(&self, id: usize) -> Result<JsValue, JsValue> {
        let layer = ShelterLayer::new(self.inner.dataset(), self.inner.selection());
        match layer.select(PointId(id)) {
            Some(shelter) => to_js(&serde_json::json!({
                "name": shelter.display_name(),
                "capacity": shelter.capacity.as_deref().unwrap_or("N/A"),
                "type": shelter.kind.as_deref().unwrap_or("N/A"),
            })),
            None => Ok(JsValue::NULL),
        }
    }

    /// Details for a clicked earthquake circle, or null.
    pub fn earthquake_at(&self, id: usize) -> Result<JsValue, JsValue> {
        let layer = EarthquakeLayer::new(self.inner.dataset(), self.inner.selection());
        match layer.select(PointId(id)) {
            Some(eq) => to_js(eq),
            None => Ok(JsValue::NULL),
        }
    }

    /// Validate the "list a shelter" form. Returns the accepted entry or throws the field errors.
    pub fn submit_shelter(&self, form: JsValue) -> Result<JsValue, JsValue> {
        let form: ShelterSubmission = serde_wasm_bindgen::from_value(form).map_err(js_err)?;
        match form.submit(self.inner.dataset()) {
            Ok(shelter) => to_js(&shelter),
            Err(errors) => Err(to_js(&errors)?),
        }
    }
}
