//! Deleting a movie by exact title.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::{Error, Result};

use super::{persist, read_trimmed};

/// Prompt for a title and remove it from the catalog.
///
/// No confirmation prompt; an absent title is reported and nothing
/// changes. A successful removal is persisted immediately.
pub fn cmd_delete<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    store_path: &Path,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let Some(title) = read_trimmed(input, output, "Enter movie title to delete: ")? else {
        return Ok(());
    };

    if catalog.remove(&title).is_none() {
        return Err(Error::not_found(title));
    }

    persist(catalog, store_path, output)?;
    writeln!(output, "Movie '{title}' deleted successfully!")?;
    Ok(())
}
