//! Application-wide error types.
//!
//! Every user-facing diagnostic lives in the `#[error]` display string of
//! its variant, so the menu loop reports a failure by printing the error.
//! The offending input is logged at the parse site rather than carried
//! here; the messages themselves are fixed.

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
///
/// `Io` is the only variant the menu loop propagates - it means the
/// console itself is gone. Everything else is printed and recovered from.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Console I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rating input was not a number in [0.0, 10.0]
    #[error("Invalid rating. Please enter a number between 0.0 and 10.0.")]
    InvalidRating,

    /// Year input was not an integer in [1800, 2024]
    #[error("Invalid year. Please enter a valid year.")]
    InvalidYear,

    /// Menu selection was not an integer
    #[error("Invalid input. Please enter a number between 0 and 4.")]
    NonIntegerSelection,

    /// Menu selection was an integer outside the menu
    #[error("Invalid choice. Please select a valid option.")]
    InvalidSelection,

    /// Delete target is not in the catalog
    #[error("Movie '{0}' not found.")]
    NotFound(String),
}

impl Error {
    /// Create a not found error.
    pub fn not_found(title: impl Into<String>) -> Self {
        Self::NotFound(title.into())
    }
}
