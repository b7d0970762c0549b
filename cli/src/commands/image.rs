use anyhow::{bail, Result};

use crate::cli::{Cli, ImageArgs};

pub fn run(_cli: &Cli, args: &ImageArgs) -> Result<()> {
    let client = super::enrichment_client(&args.enrichment)?;
    match client.representative_image(&args.query) {
        Some(link) => { println!("{link}"); Ok(()) }
        None => bail!("[cli::image] No image found for {:?}", args.query),
    }
}
