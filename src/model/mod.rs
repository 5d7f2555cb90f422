//! Core data model for the movie catalog.
//!
//! A movie is stored under its title with a rating and a release year.
//! The bounds here are the validation contract for user input: ratings
//! live in [0.0, 10.0], years in [1800, 2024]. The parse functions are
//! the only way user text becomes a stored value.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lowest accepted rating.
pub const RATING_MIN: f64 = 0.0;
/// Highest accepted rating.
pub const RATING_MAX: f64 = 10.0;
/// Earliest accepted release year.
pub const YEAR_MIN: i32 = 1800;
/// Latest accepted release year. A fixed literal: the stored-data
/// invariant is pinned to this value, not to the calendar.
pub const YEAR_MAX: i32 = 2024;

/// A movie in the catalog.
///
/// The title is the catalog key rather than a field, mirroring the shape
/// of the persisted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Rating in [0.0, 10.0]
    pub rating: f64,
    /// Release year in [1800, 2024]
    pub year: i32,
}

impl Movie {
    pub fn new(rating: f64, year: i32) -> Self {
        Self { rating, year }
    }
}

/// Parse a rating out of raw user input.
///
/// Accepts any `f64` within [`RATING_MIN`]..=[`RATING_MAX`]. Anything
/// else, including NaN and out-of-range numbers, is [`Error::InvalidRating`].
pub fn parse_rating(raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(rating) if (RATING_MIN..=RATING_MAX).contains(&rating) => Ok(rating),
        _ => {
            tracing::debug!(raw, "rejected rating input");
            Err(Error::InvalidRating)
        }
    }
}

/// Parse a release year out of raw user input.
///
/// Accepts any `i32` within [`YEAR_MIN`]..=[`YEAR_MAX`]; anything else is
/// [`Error::InvalidYear`].
pub fn parse_year(raw: &str) -> Result<i32> {
    match raw.trim().parse::<i32>() {
        Ok(year) if (YEAR_MIN..=YEAR_MAX).contains(&year) => Ok(year),
        _ => {
            tracing::debug!(raw, "rejected year input");
            Err(Error::InvalidYear)
        }
    }
}
