//! Rating statistics over the whole catalog.

use std::io::Write;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::stats;

/// Print mean, median, and the best/worst titles.
///
/// The empty-catalog guard comes first; when every rating is the same the
/// best and worst lines print the same titles, and that is fine.
pub fn cmd_stats<W: Write>(catalog: &Catalog, output: &mut W) -> Result<()> {
    let Some(stats) = stats::compute(catalog) else {
        writeln!(output, "No movies found.")?;
        return Ok(());
    };

    writeln!(output, "Average rating: {:.1}", stats.mean)?;
    writeln!(output, "Median rating: {:.1}", stats.median)?;
    writeln!(output, "Best movies ({:.1}): {}", stats.max, stats.best.join(", "))?;
    writeln!(output, "Worst movies ({:.1}): {}", stats.min, stats.worst.join(", "))?;
    Ok(())
}
