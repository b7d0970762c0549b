use anyhow::{ensure, Result};
use sanlilim::{cities_in_province, provinces};

use crate::cli::{Cli, PlacesArgs};

pub fn run(cli: &Cli, args: &PlacesArgs) -> Result<()> {
    let dataset = super::load_dataset(cli)?;

    let names = match &args.province {
        None => provinces(dataset.locations()),
        Some(province) => {
            let cities = cities_in_province(dataset.locations(), province);
            ensure!(!cities.is_empty(), "[cli::places] No cities found for province {province:?}");
            cities
        }
    };

    for name in names { println!("{name}") }
    Ok(())
}
