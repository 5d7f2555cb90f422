//! Interactive menu for the movie catalog.
//!
//! This module provides the numbered console menu that drives the
//! catalog. Each command is implemented in its own submodule:
//! - `list`: print the catalog
//! - `add`: prompt for and validate a new movie
//! - `delete`: remove a movie by exact title
//! - `stats`: rating statistics

mod commands;

pub use commands::run;
