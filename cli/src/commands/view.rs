use std::thread;

use anyhow::Result;
use sanlilim::{trend_points, Explorer};
use tracing::{info, warn};

use crate::cli::{Cli, ViewArgs};

pub fn run(cli: &Cli, args: &ViewArgs) -> Result<()> {
    let dataset = super::load_dataset(cli)?;

    let mut explorer = Explorer::new(dataset);
    explorer.select_province(args.province.as_str());
    explorer.select_city(args.city.as_str());
    explorer.set_magnitude(args.magnitude);

    if explorer.view().map_center.is_none() {
        warn!("[cli::view] {:?} / {:?} is not in the locations table", args.province, args.city);
    }

    if args.fetch {
        let client = super::enrichment_client(&args.enrichment)?;
        let population = explorer.population_request();
        let image = explorer.image_request();

        // Both lookups run concurrently; results come back tagged.
        let (population, image) = thread::scope(|scope| {
            let population = population.map(|req| {
                let client = &client;
                scope.spawn(move || (req.tag, client.population_for_city(&req.query)))
            });
            let image = image.map(|req| {
                let client = &client;
                scope.spawn(move || (req.tag, client.representative_image(&req.query)))
            });
            (population.map(|h| h.join()), image.map(|h| h.join()))
        });

        if let Some(Ok((tag, value))) = population { explorer.accept_population(tag, value); }
        if let Some(Ok((tag, value))) = image { explorer.accept_image(tag, value); }
        info!("[cli::view] population={:?} image={:?}", explorer.population(), explorer.image());
    }

    let view = explorer.view();

    if args.json {
        let json = serde_json::json!({
            "selection": explorer.selection(),
            "view": view,
            "image": explorer.image(),
            "trend": trend_points(&view.filtered_earthquakes),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!("{}, {}", args.city, args.province);
    match view.map_center {
        Some(center) => println!("  center:       {:.4}, {:.4}", center.y(), center.x()),
        None => println!("  center:       unknown"),
    }
    println!("  shelters:     {}", view.shelter_count);
    match view.population {
        Some(population) => println!("  population:   {population}"),
        None => println!("  population:   N/A"),
    }
    match view.population_per_shelter {
        Some(ratio) => println!("  per shelter:  {ratio:.0}"),
        None => println!("  per shelter:  N/A"),
    }
    if let Some(link) = explorer.image() { println!("  image:        {link}") }

    println!("  earthquakes (magnitude >= {}): {}", args.magnitude, view.filtered_earthquakes.len());
    for eq in &view.filtered_earthquakes {
        let when = eq.timestamp().map(|ts| ts.format("%Y-%m-%d %H:%M UTC").to_string()).unwrap_or_default();
        println!("    {when}  M{:<4}  {:>5.1} km  {}", eq.magnitude, eq.depth, eq.location);
    }
    Ok(())
}
