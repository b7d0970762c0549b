pub mod image;
pub mod places;
pub mod quakes;
pub mod submit;
pub mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use sanlilim::{Dataset, EnrichmentClient, EnrichmentConfig};
use tracing::info;

use crate::cli::{Cli, EnrichmentArgs};

/// Load the data directory named on the command line.
pub(crate) fn load_dataset(cli: &Cli) -> Result<Arc<Dataset>> {
    info!("[cli] loading data from {}", cli.data.display());
    let dataset = Dataset::read_from_dir(&cli.data)
        .context("[cli] Could not load data (set --data or SANLILIM_DATA_DIR)")?;
    Ok(Arc::new(dataset))
}

/// Build the enrichment client: environment settings, then command line flags.
pub(crate) fn enrichment_client(args: &EnrichmentArgs) -> Result<EnrichmentClient> {
    EnrichmentClient::http(args.apply(EnrichmentConfig::from_env()))
}
