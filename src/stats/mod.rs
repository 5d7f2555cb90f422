//! Descriptive statistics over the catalog's ratings.
//!
//! Mean and median are rounded to one decimal; best and worst report
//! every title at the extreme rating, in catalog order.

use crate::catalog::Catalog;

/// Aggregate rating statistics for a non-empty catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingStats {
    /// Mean rating, rounded to one decimal.
    pub mean: f64,
    /// Median rating, rounded to one decimal.
    pub median: f64,
    /// Highest rating in the catalog.
    pub max: f64,
    /// Lowest rating in the catalog.
    pub min: f64,
    /// Every title at the highest rating, in catalog order.
    pub best: Vec<String>,
    /// Every title at the lowest rating, in catalog order.
    pub worst: Vec<String>,
}

/// Compute rating statistics.
///
/// Returns `None` for an empty catalog; the guard comes before any
/// aggregate work. Never mutates the catalog.
pub fn compute(catalog: &Catalog) -> Option<RatingStats> {
    if catalog.is_empty() {
        return None;
    }

    let ratings: Vec<f64> = catalog.ratings().collect();

    let mean = round_to_tenth(ratings.iter().sum::<f64>() / ratings.len() as f64);
    let median = round_to_tenth(median(&ratings));

    let max = ratings.iter().copied().fold(f64::MIN, f64::max);
    let min = ratings.iter().copied().fold(f64::MAX, f64::min);

    // Ties share the extreme. Float equality is intentional: the values
    // compared are the stored ratings themselves, not derived quantities.
    let best = titles_at(catalog, max);
    let worst = titles_at(catalog, min);

    Some(RatingStats {
        mean,
        median,
        max,
        min,
        best,
        worst,
    })
}

/// Standard median: middle element for odd counts, average of the two
/// central elements for even counts.
fn median(ratings: &[f64]) -> f64 {
    let mut sorted = ratings.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

fn titles_at(catalog: &Catalog, rating: f64) -> Vec<String> {
    catalog
        .iter()
        .filter(|(_, movie)| movie.rating == rating)
        .map(|(title, _)| title.to_string())
        .collect()
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
