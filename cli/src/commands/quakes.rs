use std::path::Path;

use anyhow::Result;
use sanlilim::{trend_csv, trend_points, write_trend_csv, EarthquakeLayer, Selection};
use tracing::info;

use crate::cli::{Cli, QuakesArgs};

pub fn run(cli: &Cli, args: &QuakesArgs) -> Result<()> {
    let dataset = super::load_dataset(cli)?;

    let mut selection = Selection::new();
    if let Some(city) = &args.city { selection.set_city(city.as_str()) }
    selection.set_magnitude(args.magnitude);

    let layer = EarthquakeLayer::new(&dataset, &selection);
    info!("[cli::quakes] {} earthquakes match", layer.len());

    if let Some(path) = &args.trend {
        let points = trend_points(layer.earthquakes());
        if path == Path::new("-") {
            print!("{}", trend_csv(&points)?);
        } else {
            write_trend_csv(&points, path)?;
            eprintln!("Wrote {} trend points to {}", points.len(), path.display());
        }
        return Ok(());
    }

    for (point, eq) in layer.points().iter().zip(layer.earthquakes()) {
        let when = eq.timestamp().map(|ts| ts.format("%Y-%m-%d %H:%M UTC").to_string()).unwrap_or_default();
        println!(
            "{when}  M{:<4}  r={:>6.0} m  ({:.3}, {:.3})  {}",
            eq.magnitude, point.radius_m.unwrap_or_default(), eq.latitude, eq.longitude, eq.location,
        );
    }
    Ok(())
}
