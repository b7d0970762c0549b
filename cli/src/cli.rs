use std::path::PathBuf;

/// Shelter finder and earthquake monitor (command line front end)
#[derive(clap::Parser, Debug)]
#[command(name = "sanlilim", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory holding locations.csv, shelters.json and earthquakes.json
    #[arg(short, long, global = true, env = "SANLILIM_DATA_DIR", default_value = "data",
          value_hint = clap::ValueHint::DirPath)]
    pub data: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List provinces, or the cities of one province
    Places(PlacesArgs),

    /// Show the derived view for a province/city selection
    View(ViewArgs),

    /// List earthquakes for a city (or all above a threshold) and their trend
    Quakes(QuakesArgs),

    /// Find a representative photo for a place
    Image(ImageArgs),

    /// Validate a shelter listing (logged only, nothing is stored)
    Submit(SubmitArgs),
}

#[derive(clap::Args, Debug)]
pub struct PlacesArgs {
    /// Province whose cities to list
    pub province: Option<String>,
}

/// Lookup settings. Unset flags fall back to the `SANLILIM_*` environment variables.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct EnrichmentArgs {
    /// Google Custom Search API key [env: SANLILIM_GCP_API_KEY]
    #[arg(long)]
    pub api_key: Option<String>,

    /// Google Custom Search engine id [env: SANLILIM_GCP_SEARCH_ENGINE_ID]
    #[arg(long)]
    pub search_engine_id: Option<String>,

    /// City-level population endpoint [env: SANLILIM_CITY_POPULATION_URL]
    #[arg(long)]
    pub city_population_url: Option<String>,

    /// Municipality-level population endpoint [env: SANLILIM_MUNICIPALITY_POPULATION_URL]
    #[arg(long)]
    pub municipality_population_url: Option<String>,
}

impl EnrichmentArgs {
    /// Apply the flags that were given on top of `config`.
    pub fn apply(&self, mut config: sanlilim::EnrichmentConfig) -> sanlilim::EnrichmentConfig {
        let set = |slot: &mut Option<String>, flag: &Option<String>| {
            if let Some(value) = flag { *slot = Some(value.clone()) }
        };
        set(&mut config.image.api_key, &self.api_key);
        set(&mut config.image.search_engine_id, &self.search_engine_id);
        set(&mut config.population.city_url, &self.city_population_url);
        set(&mut config.population.municipality_url, &self.municipality_population_url);
        config
    }
}

#[derive(clap::Args, Debug)]
pub struct ViewArgs {
    /// Province, exactly as in locations.csv
    pub province: String,

    /// City or municipality, exactly as in locations.csv
    pub city: String,

    /// Minimum magnitude of listed earthquakes
    #[arg(short, long, default_value_t = 0.0)]
    pub magnitude: f64,

    /// Also look up population and a photo
    #[arg(long)]
    pub fetch: bool,

    /// Print JSON instead of a summary
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub enrichment: EnrichmentArgs,
}

#[derive(clap::Args, Debug)]
pub struct QuakesArgs {
    /// City to match against earthquake locations (all earthquakes if omitted)
    #[arg(short, long)]
    pub city: Option<String>,

    /// Minimum magnitude
    #[arg(short, long, default_value_t = 0.0)]
    pub magnitude: f64,

    /// Write the trend series as CSV to this file ("-" for stdout)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub trend: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ImageArgs {
    /// Free-text search query, e.g. "Cebu City, Cebu"
    pub query: String,

    #[command(flatten)]
    pub enrichment: EnrichmentArgs,
}

#[derive(clap::Args, Debug)]
pub struct SubmitArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long, allow_hyphen_values = true)]
    pub latitude: String,

    #[arg(long, allow_hyphen_values = true)]
    pub longitude: String,

    #[arg(long)]
    pub province: String,

    #[arg(long)]
    pub city: String,
}
