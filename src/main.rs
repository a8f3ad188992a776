mod app;
mod cli;
mod config;
mod core;
mod error;
mod output;
mod pricing;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);

    if let Err(e) = app::run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
