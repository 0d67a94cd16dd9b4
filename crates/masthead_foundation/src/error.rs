//! Error types for the Masthead system.
//!
//! Uses `thiserror` for ergonomic error definition. Every validation failure
//! names the field that failed, so display messages stand on their own.

use thiserror::Error;

use crate::id::{ArticleId, AuthorId, MagazineId};

/// Convenience alias for results carrying a Masthead [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Masthead operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an author not found error.
    #[must_use]
    pub fn author_not_found(id: AuthorId) -> Self {
        Self::new(ErrorKind::AuthorNotFound(id))
    }

    /// Creates a magazine not found error.
    #[must_use]
    pub fn magazine_not_found(id: MagazineId) -> Self {
        Self::new(ErrorKind::MagazineNotFound(id))
    }

    /// Creates an article not found error.
    #[must_use]
    pub fn article_not_found(id: ArticleId) -> Self {
        Self::new(ErrorKind::ArticleNotFound(id))
    }

    /// Creates an empty field error.
    #[must_use]
    pub fn empty_field(field: &'static str) -> Self {
        Self::new(ErrorKind::EmptyField { field })
    }

    /// Creates a length out of range error.
    #[must_use]
    pub fn length_out_of_range(field: &'static str, min: usize, max: usize, actual: usize) -> Self {
        Self::new(ErrorKind::LengthOutOfRange {
            field,
            min,
            max,
            actual,
        })
    }

    /// Creates an immutable field error.
    #[must_use]
    pub fn immutable_field(field: &'static str) -> Self {
        Self::new(ErrorKind::ImmutableField { field })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErrorKind {
    /// Author id does not resolve in the registry.
    #[error("author not found: {0}")]
    AuthorNotFound(AuthorId),

    /// Magazine id does not resolve in the registry.
    #[error("magazine not found: {0}")]
    MagazineNotFound(MagazineId),

    /// Article id does not resolve in the registry.
    #[error("article not found: {0}")]
    ArticleNotFound(ArticleId),

    /// A string field that must be non-empty was empty.
    #[error("{field} must be a non-empty string")]
    EmptyField {
        /// The field that was empty.
        field: &'static str,
    },

    /// A string field violated its length bounds.
    #[error("{field} must be between {min} and {max} characters, got {actual}")]
    LengthOutOfRange {
        /// The field that was out of range.
        field: &'static str,
        /// Minimum accepted length, in characters.
        min: usize,
        /// Maximum accepted length, in characters.
        max: usize,
        /// Length of the rejected value.
        actual: usize,
    },

    /// A field that is fixed at construction was written to.
    #[error("{field} is immutable")]
    ImmutableField {
        /// The field that was written to.
        field: &'static str,
    },
}
