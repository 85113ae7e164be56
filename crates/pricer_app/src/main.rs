mod app;
mod cli;
mod config;
mod effects;
mod logging;
mod render;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);
    let cli = cli::Cli::parse();
    app::run(cli)
}
