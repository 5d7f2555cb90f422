//! Adding a movie: prompt, validate, persist.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::{self, Movie, RATING_MAX, RATING_MIN};

use super::{persist, read_trimmed};

/// Prompt for a new movie and add it to the catalog.
///
/// The title prompt repeats until it gets something non-empty; rating and
/// year get a single shot each and abort the command on bad input, with
/// nothing persisted. A duplicate title silently overwrites the previous
/// entry.
pub fn cmd_add<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    store_path: &Path,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let Some(title) = prompt_title(input, output)? else {
        return Ok(());
    };

    let rating_prompt = format!("Enter movie rating ({RATING_MIN:.1} - {RATING_MAX:.1}): ");
    let Some(raw_rating) = read_trimmed(input, output, &rating_prompt)? else {
        return Ok(());
    };
    let rating = model::parse_rating(&raw_rating)?;

    let Some(raw_year) = read_trimmed(input, output, "Enter movie release year: ")? else {
        return Ok(());
    };
    let year = model::parse_year(&raw_year)?;

    catalog.insert(title.clone(), Movie::new(rating, year));
    persist(catalog, store_path, output)?;
    writeln!(output, "Movie '{title}' added successfully!")?;

    Ok(())
}

/// Read a title, re-prompting until it is non-empty after trimming.
/// `None` means the input stream closed mid-prompt.
fn prompt_title<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<String>> {
    let mut prompt = "Enter movie title: ";
    loop {
        let Some(title) = read_trimmed(input, output, prompt)? else {
            return Ok(None);
        };
        if !title.is_empty() {
            return Ok(Some(title));
        }
        prompt = "Title cannot be empty. Enter movie title: ";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::store;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn add_with(catalog: &mut Catalog, path: &Path, script: &str) -> (Result<()>, String) {
        let mut output = Vec::new();
        let result = cmd_add(
            catalog,
            path,
            &mut Cursor::new(script.to_string()),
            &mut output,
        );
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_adds_and_persists_a_movie() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("movies.json");
        let mut catalog = Catalog::new();

        let (result, output) = add_with(&mut catalog, &path, "The Matrix\n8.7\n1999\n");

        assert!(result.is_ok());
        assert!(output.contains("Movie 'The Matrix' added successfully!"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(store::load(&path), catalog);
    }

    #[test]
    fn test_empty_title_reprompts() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("movies.json");
        let mut catalog = Catalog::new();

        let (result, output) =
            add_with(&mut catalog, &path, "\n   \nBlade Runner\n8.1\n1982\n");

        assert!(result.is_ok());
        assert!(output.contains("Title cannot be empty. Enter movie title: "));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_out_of_range_rating_aborts() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("movies.json");
        let mut catalog = Catalog::new();

        let (result, _) = add_with(&mut catalog, &path, "Film\n11.0\n");

        assert!(matches!(result, Err(Error::InvalidRating)));
        assert!(catalog.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_negative_rating_aborts() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("movies.json");
        let mut catalog = Catalog::new();

        let (result, _) = add_with(&mut catalog, &path, "Film\n-1.0\n");

        assert!(matches!(result, Err(Error::InvalidRating)));
        assert!(catalog.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_non_numeric_rating_aborts() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("movies.json");
        let mut catalog = Catalog::new();

        let (result, _) = add_with(&mut catalog, &path, "Film\ngreat\n");

        assert!(matches!(result, Err(Error::InvalidRating)));
        assert!(catalog.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_out_of_range_year_aborts() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("movies.json");
        let mut catalog = Catalog::new();

        let (result, _) = add_with(&mut catalog, &path, "Film\n7.0\n1799\n");
        assert!(matches!(result, Err(Error::InvalidYear)));

        let (result, _) = add_with(&mut catalog, &path, "Film\n7.0\n2025\n");
        assert!(matches!(result, Err(Error::InvalidYear)));

        assert!(catalog.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_duplicate_title_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("movies.json");
        let mut catalog = Catalog::new();
        catalog.insert("Dune", Movie::new(6.0, 1984));

        let (result, _) = add_with(&mut catalog, &path, "Dune\n8.0\n2021\n");

        assert!(result.is_ok());
        assert_eq!(catalog.len(), 1);
        let (_, movie) = catalog.iter().next().unwrap();
        assert_eq!(movie, &Movie::new(8.0, 2021));
    }

    #[test]
    fn test_closed_input_aborts_quietly() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("movies.json");
        let mut catalog = Catalog::new();

        // Stream ends before the rating arrives.
        let (result, _) = add_with(&mut catalog, &path, "Film\n");

        assert!(result.is_ok());
        assert!(catalog.is_empty());
        assert!(!path.exists());
    }
}
