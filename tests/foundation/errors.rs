//! Integration tests for Error types
//!
//! Tests error construction, display, and error kinds.

use masthead_foundation::{ArticleId, AuthorId, Error, ErrorKind, MagazineId, Result};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_author_not_found() {
    let err = Error::author_not_found(AuthorId::new(42));
    assert!(matches!(err.kind, ErrorKind::AuthorNotFound(_)));
    let msg = format!("{err}");
    assert!(msg.contains("42"));
}

#[test]
fn error_magazine_not_found() {
    let err = Error::magazine_not_found(MagazineId::new(9));
    assert!(matches!(err.kind, ErrorKind::MagazineNotFound(_)));
    assert!(format!("{err}").contains("9"));
}

#[test]
fn error_article_not_found() {
    let err = Error::article_not_found(ArticleId::new(5));
    assert!(matches!(err.kind, ErrorKind::ArticleNotFound(_)));
    assert!(format!("{err}").contains("5"));
}

#[test]
fn error_empty_field() {
    let err = Error::empty_field("author name");
    assert!(matches!(err.kind, ErrorKind::EmptyField { .. }));
    assert!(format!("{err}").contains("author name"));
}

#[test]
fn error_length_out_of_range() {
    let err = Error::length_out_of_range("magazine name", 2, 16, 17);
    assert!(matches!(err.kind, ErrorKind::LengthOutOfRange { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("2"));
    assert!(msg.contains("16"));
    assert!(msg.contains("17"));
}

#[test]
fn error_immutable_field() {
    let err = Error::immutable_field("article title");
    assert!(matches!(err.kind, ErrorKind::ImmutableField { .. }));
    assert!(format!("{err}").contains("immutable"));
}

// =============================================================================
// Error Kind Matching
// =============================================================================

#[test]
fn error_kind_carries_the_offending_id() {
    let err = Error::author_not_found(AuthorId::new(99));
    if let ErrorKind::AuthorNotFound(id) = err.kind {
        assert_eq!(id.index, 99);
    } else {
        panic!("Expected AuthorNotFound");
    }
}

#[test]
fn error_kind_carries_the_offending_field() {
    let err = Error::immutable_field("author name");
    if let ErrorKind::ImmutableField { field } = err.kind {
        assert_eq!(field, "author name");
    } else {
        panic!("Expected ImmutableField");
    }
}

#[test]
fn error_kinds_are_comparable() {
    assert_eq!(
        Error::empty_field("author name").kind,
        Error::empty_field("author name").kind
    );
    assert_ne!(
        Error::empty_field("author name").kind,
        Error::empty_field("magazine category").kind
    );
}

// =============================================================================
// Error Chaining
// =============================================================================

#[test]
fn error_result_propagation() {
    fn inner() -> Result<()> {
        Err(Error::length_out_of_range("article title", 5, 50, 51))
    }

    fn outer() -> Result<()> {
        inner()?;
        Ok(())
    }

    let result = outer();
    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().kind,
        ErrorKind::LengthOutOfRange { .. }
    ));
}
