use anyhow::Result;

/// Transport for the enrichment lookups: GET `url` with `query` appended and
/// decode the body as JSON.
pub trait Fetcher: Send + Sync {
    fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<serde_json::Value>;
}

#[cfg(feature = "fetch")]
pub use http::HttpFetcher;

#[cfg(feature = "fetch")]
mod http {
    use std::time::Duration;

    use anyhow::{Context, Result};
    use reqwest::{blocking::Client, redirect::Policy};

    use super::Fetcher;

    /// Blocking HTTP transport.
    #[derive(Debug, Clone)]
    pub struct HttpFetcher {
        client: Client,
    }

    impl HttpFetcher {
        pub fn new() -> Result<Self> {
            Self::with_timeout(Duration::from_secs(10))
        }

        pub fn with_timeout(timeout: Duration) -> Result<Self> {
            let client = Client::builder()
                .user_agent(concat!("sanlilim/", env!("CARGO_PKG_VERSION")))
                .redirect(Policy::limited(10))
                .timeout(timeout)
                .build()
                .context("[enrich::fetch] Failed to build HTTP client")?;
            Ok(Self { client })
        }
    }

    impl Fetcher for HttpFetcher {
        fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<serde_json::Value> {
            // The query may carry an API key; only the bare URL goes into messages.
            let bytes = self.client.get(url)
                .query(query)
                .send()
                .with_context(|| format!("GET {url}"))?
                .error_for_status()
                .with_context(|| format!("GET {url} returned error status"))?
                .bytes()
                .with_context(|| format!("GET {url}: failed to read body"))?;

            serde_json::from_slice(&bytes)
                .with_context(|| format!("GET {url}: body is not JSON"))
        }
    }
}
