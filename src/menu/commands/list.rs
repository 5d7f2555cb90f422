//! Catalog listing.

use std::io::Write;

use crate::catalog::Catalog;
use crate::error::Result;

/// Print every movie in catalog order, one line per entry.
pub fn cmd_list<W: Write>(catalog: &Catalog, output: &mut W) -> Result<()> {
    if catalog.is_empty() {
        writeln!(output, "No movies found.")?;
        return Ok(());
    }

    writeln!(output)?;
    writeln!(output, "Movies in your collection:")?;
    for (title, movie) in catalog.iter() {
        writeln!(
            output,
            "  {} - Rating: {:.1}, Year: {}",
            title, movie.rating, movie.year
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Movie;

    fn list_to_string(catalog: &Catalog) -> String {
        let mut output = Vec::new();
        cmd_list(catalog, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_empty_catalog_prints_no_movies() {
        assert_eq!(list_to_string(&Catalog::new()), "No movies found.\n");
    }

    #[test]
    fn test_lists_in_catalog_order() {
        let mut catalog = Catalog::new();
        catalog.insert("Heat", Movie::new(8.3, 1995));
        catalog.insert("Alien", Movie::new(8.5, 1979));

        let expected = "\nMovies in your collection:\n  Heat - Rating: 8.3, Year: 1995\n  Alien - Rating: 8.5, Year: 1979\n";
        assert_eq!(list_to_string(&catalog), expected);
    }

    #[test]
    fn test_ratings_display_one_decimal() {
        let mut catalog = Catalog::new();
        catalog.insert("Nine", Movie::new(9.0, 2009));

        assert!(list_to_string(&catalog).contains("Nine - Rating: 9.0, Year: 2009"));
    }

    #[test]
    fn test_listing_does_not_mutate() {
        let mut catalog = Catalog::new();
        catalog.insert("Heat", Movie::new(8.3, 1995));
        let before = catalog.clone();

        list_to_string(&catalog);

        assert_eq!(catalog, before);
    }
}
