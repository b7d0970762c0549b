mod config;
mod fetch;
mod image;
mod population;

pub use config::{
    EnrichmentConfig, ImageSearchConfig, PopulationConfig, DEFAULT_IMAGE_SEARCH_ENDPOINT,
    ENV_CITY_POPULATION_URL, ENV_GCP_API_KEY, ENV_GCP_SEARCH_ENGINE_ID, ENV_MUNICIPALITY_POPULATION_URL,
};
pub use fetch::Fetcher;
#[cfg(feature = "fetch")]
pub use fetch::HttpFetcher;
pub use image::{fetch_representative_image, image_links, pick_image_link};
pub use population::{
    fetch_population_for_city, match_population, population_records, PopulationLevel, PopulationRecord,
};

use std::sync::Arc;

/// Image and population lookups behind one transport and configuration.
/// Lookups never fail: errors are logged and come back as `None`.
#[derive(Clone)]
pub struct EnrichmentClient {
    fetcher: Arc<dyn Fetcher>,
    config: EnrichmentConfig,
}

impl EnrichmentClient {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: EnrichmentConfig) -> Self {
        Self { fetcher, config }
    }

    /// Client over the blocking HTTP transport.
    #[cfg(feature = "fetch")]
    pub fn http(config: EnrichmentConfig) -> anyhow::Result<Self> {
        Ok(Self::new(Arc::new(HttpFetcher::new()?), config))
    }

    #[inline] pub fn config(&self) -> &EnrichmentConfig { &self.config }

    pub fn population_for_city(&self, city: &str) -> Option<u64> {
        fetch_population_for_city(self.fetcher.as_ref(), &self.config.population, city)
    }

    pub fn representative_image(&self, query: &str) -> Option<String> {
        fetch_representative_image(self.fetcher.as_ref(), &self.config.image, query)
    }
}

impl std::fmt::Debug for EnrichmentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrichmentClient").finish_non_exhaustive()
    }
}
