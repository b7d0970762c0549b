mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{image, places, quakes, submit, view};
use tracing_subscriber::EnvFilter;

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Places(args) => places::run(&cli, args),
        Commands::View(args) => view::run(&cli, args),
        Commands::Quakes(args) => quakes::run(&cli, args),
        Commands::Image(args) => image::run(&cli, args),
        Commands::Submit(args) => submit::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
