use serde::{Deserialize, Serialize};

use super::PopulationLevel;

pub const ENV_GCP_API_KEY: &str = "SANLILIM_GCP_API_KEY";
pub const ENV_GCP_SEARCH_ENGINE_ID: &str = "SANLILIM_GCP_SEARCH_ENGINE_ID";
pub const ENV_CITY_POPULATION_URL: &str = "SANLILIM_CITY_POPULATION_URL";
pub const ENV_MUNICIPALITY_POPULATION_URL: &str = "SANLILIM_MUNICIPALITY_POPULATION_URL";

/// Google Custom Search JSON API.
pub const DEFAULT_IMAGE_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Image search settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSearchConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub search_engine_id: Option<String>,
    /// Number of results to request.
    pub num: u32,
    /// Hosts whose images are skipped (subdomains included).
    pub excluded_hosts: Vec<String>,
}

impl Default for ImageSearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_IMAGE_SEARCH_ENDPOINT.to_string(),
            api_key: None,
            search_engine_id: None,
            num: 10,
            // Social-media thumbnails: tiny and usually blocked from hotlinking.
            excluded_hosts: vec!["lookaside.fbsbx.com".to_string(), "lookaside.instagram.com".to_string()],
        }
    }
}

/// Population endpoints. Either may be left unset, in which case it is skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    pub city_url: Option<String>,
    pub municipality_url: Option<String>,
}

impl PopulationConfig {
    /// Endpoint for `level`, if configured.
    pub fn url(&self, level: PopulationLevel) -> Option<&str> {
        match level {
            PopulationLevel::City => self.city_url.as_deref(),
            PopulationLevel::Municipality => self.municipality_url.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    pub image: ImageSearchConfig,
    pub population: PopulationConfig,
}

impl EnrichmentConfig {
    /// Defaults, overridden by any `SANLILIM_*` variables that are set and non-empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = Self::default();
        config.image.api_key = var(ENV_GCP_API_KEY);
        config.image.search_engine_id = var(ENV_GCP_SEARCH_ENGINE_ID);
        config.population.city_url = var(ENV_CITY_POPULATION_URL);
        config.population.municipality_url = var(ENV_MUNICIPALITY_POPULATION_URL);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lookup_ignores_blank_values() {
        let config = EnrichmentConfig::from_lookup(|key| match key {
            ENV_GCP_API_KEY => Some("key".to_string()),
            ENV_GCP_SEARCH_ENGINE_ID => Some("  ".to_string()),
            ENV_CITY_POPULATION_URL => Some("https://example.org/cities".to_string()),
            _ => None,
        });

        assert_eq!(config.image.api_key.as_deref(), Some("key"));
        assert_eq!(config.image.search_engine_id, None);
        assert_eq!(config.image.endpoint, DEFAULT_IMAGE_SEARCH_ENDPOINT);
        assert_eq!(config.population.city_url.as_deref(), Some("https://example.org/cities"));
        assert_eq!(config.population.municipality_url, None);
    }
}
