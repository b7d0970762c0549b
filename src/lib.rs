#![doc = "Sanlilim public API"]
mod data;
mod engine;
mod enrich;
mod io;
mod present;
mod shell;

#[doc(inline)]
pub use data::{DataSource, Dataset, DiskSource, Earthquake, Location, MemSource, Shelter};

#[doc(inline)]
pub use engine::{
    cities_in_province, count_shelters_for_city, derive_view, filter_earthquakes_by_city_and_magnitude,
    filter_earthquakes_by_magnitude, population_per_shelter, provinces, resolve_map_center,
    shelters_for_city, DerivedView, EnrichmentRequest, Explorer, RequestTag, Selection, MAX_EARTHQUAKES,
};

#[doc(inline)]
pub use enrich::{
    fetch_population_for_city, fetch_representative_image, image_links, match_population, pick_image_link,
    population_records, EnrichmentClient, EnrichmentConfig, Fetcher, ImageSearchConfig, PopulationConfig,
    PopulationLevel, PopulationRecord, DEFAULT_IMAGE_SEARCH_ENDPOINT, ENV_CITY_POPULATION_URL, ENV_GCP_API_KEY,
    ENV_GCP_SEARCH_ENGINE_ID, ENV_MUNICIPALITY_POPULATION_URL,
};

#[cfg(feature = "fetch")]
#[doc(inline)]
pub use enrich::HttpFetcher;

#[doc(inline)]
pub use present::{
    trend_csv, trend_points, write_trend_csv, EarthquakeLayer, MapPoint, MapView, PointId, ShelterLayer,
    TrendPoint, EARTHQUAKE_MAP_DEFAULT_CENTER, EARTHQUAKE_MAP_DEFAULT_ZOOM, EARTHQUAKE_MAP_FOCUSED_ZOOM,
    METERS_PER_MAGNITUDE, SHELTER_MAP_DEFAULT_CENTER, SHELTER_MAP_DEFAULT_ZOOM, SHELTER_MAP_FOCUSED_ZOOM,
};

#[doc(inline)]
pub use shell::{
    active_section, FieldError, FrameThrottle, NavState, Section, SectionBounds, ShelterSubmission,
    ValidatedShelter,
};
