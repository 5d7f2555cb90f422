//! The in-memory movie catalog.
//!
//! A thin wrapper around an insertion-ordered map from title to [`Movie`].
//! Listing and statistics both report in insertion order, so the ordering
//! is part of the contract, not a cosmetic detail.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::Movie;

/// Mapping from movie title to its stored attributes.
///
/// Serializes as a plain JSON object with titles as keys. Re-inserting an
/// existing title overwrites the entry in place; deleting shifts the
/// remaining entries up without reordering them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    movies: IndexMap<String, Movie>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of movies in the catalog.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Insert or overwrite the entry for `title`, returning the previous
    /// entry if there was one. An existing title keeps its position.
    pub fn insert(&mut self, title: impl Into<String>, movie: Movie) -> Option<Movie> {
        self.movies.insert(title.into(), movie)
    }

    /// Remove the entry for `title`, preserving the order of the rest.
    pub fn remove(&mut self, title: &str) -> Option<Movie> {
        self.movies.shift_remove(title)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Movie)> + '_ {
        self.movies.iter().map(|(title, movie)| (title.as_str(), movie))
    }

    /// Iterate ratings in insertion order.
    pub fn ratings(&self) -> impl Iterator<Item = f64> + '_ {
        self.movies.values().map(|movie| movie.rating)
    }
}
