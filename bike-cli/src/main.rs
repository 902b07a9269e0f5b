//! Bike CLI - Command line tool for exploring bike rental data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bike-cli",
    version,
    about = "Bike sharing rental data dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: bike_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Starting bike-cli");
    bike_cmd::run(cli.command)
}
