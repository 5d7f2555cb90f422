//! Menu command definitions and dispatch.
//!
//! The loop reads one selection per iteration, dispatches to the matching
//! command, and reports command failures by printing them. Nothing a user
//! types can end the process except selection 0 (or closing the input
//! stream); only a broken console escapes as an error.

mod add;
mod delete;
mod list;
mod stats;

use std::io::{BufRead, Write};
use std::path::Path;

pub use add::cmd_add;
pub use delete::cmd_delete;
pub use list::cmd_list;
pub use stats::cmd_stats;

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::store;

/// One menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Exit,
    List,
    Add,
    Delete,
    Stats,
}

/// Parse a menu selection from a line of input.
///
/// Non-integer input and integers outside the menu are distinct
/// failures: the former usually means a typo, the latter a wrong guess
/// at the menu, and each gets its own diagnostic.
pub fn parse_selection(raw: &str) -> Result<Selection> {
    let choice: i64 = raw.trim().parse().map_err(|_| {
        tracing::debug!(raw, "selection is not an integer");
        Error::NonIntegerSelection
    })?;

    match choice {
        0 => Ok(Selection::Exit),
        1 => Ok(Selection::List),
        2 => Ok(Selection::Add),
        3 => Ok(Selection::Delete),
        4 => Ok(Selection::Stats),
        _ => {
            tracing::debug!(choice, "selection is outside the menu");
            Err(Error::InvalidSelection)
        }
    }
}

/// Run the interactive menu until the user exits.
///
/// Generic over the console streams so tests can drive a whole session
/// from a buffer. Command failures are printed, never propagated; the
/// catalog is left in whatever state the executed commands produced.
pub fn run<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    store_path: &Path,
    mut input: R,
    mut output: W,
) -> std::io::Result<()> {
    loop {
        writeln!(output)?;
        writeln!(output, "Menu:")?;
        writeln!(output, "0. Exit")?;
        writeln!(output, "1. List movies")?;
        writeln!(output, "2. Add movie")?;
        writeln!(output, "3. Delete movie")?;
        writeln!(output, "4. Show statistics")?;

        let Some(line) = read_trimmed(&mut input, &mut output, "\nChoose an option: ")? else {
            // Input stream closed; nothing more can arrive.
            tracing::info!("Input closed, exiting");
            break;
        };

        let outcome = match parse_selection(&line) {
            Ok(Selection::Exit) => {
                writeln!(output, "Goodbye!")?;
                break;
            }
            Ok(Selection::List) => cmd_list(catalog, &mut output),
            Ok(Selection::Add) => cmd_add(catalog, store_path, &mut input, &mut output),
            Ok(Selection::Delete) => cmd_delete(catalog, store_path, &mut input, &mut output),
            Ok(Selection::Stats) => cmd_stats(catalog, &mut output),
            Err(e) => Err(e),
        };

        if let Err(e) = outcome {
            match e {
                Error::Io(io_err) => return Err(io_err),
                user_facing => writeln!(output, "{user_facing}")?,
            }
        }
    }

    Ok(())
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Print `prompt` and read one trimmed line. `None` means the input
/// stream is exhausted.
pub(crate) fn read_trimmed<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> std::io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Write the catalog through [`store::save`], reporting failure to the
/// user without undoing the in-memory change.
pub(crate) fn persist<W: Write>(
    catalog: &Catalog,
    store_path: &Path,
    output: &mut W,
) -> std::io::Result<()> {
    if let Err(e) = store::save(store_path, catalog) {
        tracing::error!(error = %e, "Failed to persist catalog");
        writeln!(output, "Error saving movies: {e}")?;
    }
    Ok(())
}
