// src/bin/artisan-runner.rs

//! Command-line entry point for artisan-runner.

use artisan_runner::{
    cli::{Cli, handlers},
    core::console,
};
use clap::Parser;

/// Sets up logging, parses arguments, runs the launcher and performs
/// centralized error handling.
fn main() {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("CLI args parsed: {:?}", cli);

    if let Err(e) = handlers::run::handle(cli) {
        // Every fatal condition ends here: print it and exit with a failure code.
        console::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
