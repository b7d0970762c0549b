use anyhow::{bail, Result};
use sanlilim::ShelterSubmission;

use crate::cli::{Cli, SubmitArgs};

pub fn run(cli: &Cli, args: &SubmitArgs) -> Result<()> {
    let dataset = super::load_dataset(cli)?;

    let submission = ShelterSubmission {
        name: args.name.clone(),
        latitude: args.latitude.clone(),
        longitude: args.longitude.clone(),
        province: args.province.clone(),
        city: args.city.clone(),
    };

    match submission.submit(&dataset) {
        Ok(shelter) => {
            println!("{}", serde_json::to_string_pretty(&shelter)?);
            Ok(())
        }
        Err(errors) => {
            for error in &errors { eprintln!("  {error}") }
            bail!("[cli::submit] Submission rejected ({} problem(s))", errors.len())
        }
    }
}
