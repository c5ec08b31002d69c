mod app;
mod cli;
mod config;
mod entry;
mod error;
mod io;
mod state;

use clap::Parser;
use cli::Cli;
use config::Config;
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = Config::create_default() {
        eprintln!("Failed to write default config: {}", e);
    }
    let mut config = Config::load();
    cli.apply_to(&mut config);

    // Start at the given path, else Home, else the working directory
    let start_path = cli
        .path
        .or_else(|| directories::UserDirs::new().map(|ud| ud.home_dir().to_path_buf()))
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    let start_path = start_path.canonicalize().unwrap_or(start_path);

    let mut app = app::App::new(config, start_path);
    if let Err(e) = app.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
