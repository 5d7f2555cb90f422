//! Movie Minder - an interactive movie catalog manager.
//!
//! Keeps a collection of movies (title, rating, release year) in a JSON
//! document in the working directory and drives everything through a numbered
//! console menu: list, add, delete, and rating statistics. The catalog is
//! loaded once at startup and rewritten in full after every mutation.

pub mod catalog;
pub mod error;
pub mod menu;
pub mod model;
pub mod stats;
pub mod store;

use std::io;
use std::path::Path;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Movie Minder CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    // Initialize logging. Diagnostics go to stderr; stdout is the menu.
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive("movie_minder=info".parse().unwrap()))
        .init();

    let store_path = Path::new(store::STORE_FILE);
    let mut catalog = store::load(store_path);

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&mut catalog, store_path, stdin.lock(), stdout.lock())?;

    Ok(())
}
