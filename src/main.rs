//! hexo2astro - Hexo to Astro blog migration
//!
//! Converts Hexo post front matter to the Astro blog format and generates
//! the redirect table that keeps old post URLs working.

use clap::Parser;

mod cli;
mod commands;
mod convert;
mod error;
mod logging;
mod progress;
mod routes;
mod walker;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.quiet);
    let show_progress = !cli.verbose && !cli.quiet;

    let result = match cli.command {
        Commands::Convert(args) => commands::convert::run(args, show_progress),
        Commands::Routes(args) => commands::routes::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
