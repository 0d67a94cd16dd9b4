//! Integration tests for the newsroom composition root
//!
//! Tests cross-registry validation, counts, and registry candidacy.

use masthead_foundation::{AuthorId, ErrorKind, MagazineId};
use masthead_storage::Newsroom;

// =============================================================================
// Newsroom Creation
// =============================================================================

#[test]
fn newsroom_starts_empty() {
    let newsroom = Newsroom::new();
    assert_eq!(newsroom.author_count(), 0);
    assert_eq!(newsroom.magazine_count(), 0);
    assert_eq!(newsroom.article_count(), 0);
}

#[test]
fn newsrooms_are_independent_graphs() {
    let mut first = Newsroom::new();
    let mut second = Newsroom::new();

    first.add_author("Ann Leckie").unwrap();
    first.add_magazine("Clarkesworld", "Science Fiction").unwrap();

    // The second newsroom shares no registry with the first
    assert_eq!(second.author_count(), 0);
    assert_eq!(second.magazine_count(), 0);
    assert!(second.add_author("Ted Chiang").is_ok());
    assert_eq!(first.author_count(), 1);
}

// =============================================================================
// Registry Candidacy
// =============================================================================

#[test]
fn a_new_magazine_is_immediately_in_the_registry() {
    let mut newsroom = Newsroom::new();
    let magazine = newsroom.add_magazine("Clarkesworld", "Science Fiction").unwrap();

    assert_eq!(newsroom.magazine_count(), 1);
    // With no other magazines it is already the top publisher
    assert_eq!(newsroom.top_publisher(), Some(magazine));
}

#[test]
fn add_article_grows_both_query_results_by_one() {
    let mut newsroom = Newsroom::new();
    let author = newsroom.add_author("Ann Leckie").unwrap();
    let magazine = newsroom.add_magazine("Clarkesworld", "Science Fiction").unwrap();

    let by_author_before = newsroom.articles_by(author).count();
    let in_magazine_before = newsroom.articles_in(magazine).count();

    newsroom.add_article(author, magazine, "The Raven Tower").unwrap();

    assert_eq!(newsroom.articles_by(author).count(), by_author_before + 1);
    assert_eq!(newsroom.articles_in(magazine).count(), in_magazine_before + 1);
}

// =============================================================================
// Cross-Registry Validation
// =============================================================================

#[test]
fn add_article_validates_references_before_committing() {
    let mut newsroom = Newsroom::new();
    let author = newsroom.add_author("Ann Leckie").unwrap();
    let magazine = newsroom.add_magazine("Clarkesworld", "Science Fiction").unwrap();

    let bad_author = newsroom.add_article(AuthorId::new(5), magazine, "The Raven Tower");
    assert!(matches!(
        bad_author.unwrap_err().kind,
        ErrorKind::AuthorNotFound(_)
    ));

    let bad_magazine = newsroom.add_article(author, MagazineId::new(5), "The Raven Tower");
    assert!(matches!(
        bad_magazine.unwrap_err().kind,
        ErrorKind::MagazineNotFound(_)
    ));

    assert_eq!(newsroom.article_count(), 0);
}

#[test]
fn not_found_wins_over_immutability() {
    let mut newsroom = Newsroom::new();

    // Both an unknown id and an immutable target: the id check runs first
    let result = newsroom.set_author_name(AuthorId::new(0), "Anyone");
    assert!(matches!(
        result.unwrap_err().kind,
        ErrorKind::AuthorNotFound(_)
    ));
}

// =============================================================================
// Accessors
// =============================================================================

#[test]
fn accessors_resolve_registered_entities() {
    let mut newsroom = Newsroom::new();
    let author = newsroom.add_author("Ann Leckie").unwrap();
    let magazine = newsroom.add_magazine("Clarkesworld", "Science Fiction").unwrap();
    let article = newsroom.add_article(author, magazine, "The Raven Tower").unwrap();

    assert_eq!(newsroom.author(author).unwrap().name(), "Ann Leckie");
    assert_eq!(newsroom.magazine(magazine).unwrap().name(), "Clarkesworld");
    assert_eq!(newsroom.magazine(magazine).unwrap().category(), "Science Fiction");
    assert_eq!(newsroom.article(article).unwrap().title(), "The Raven Tower");
}
