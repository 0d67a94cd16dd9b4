//! Typed identifiers for registry entries.
//!
//! Each entity kind gets its own id type, so an author can never be passed
//! where a magazine is expected. Registries are append-only, so an id is a
//! plain index with no generation counter.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier for an author registry entry.
///
/// Ids carry no owner tag: an id minted by one newsroom resolves to whatever
/// another newsroom's registry holds at that index, or fails as not-found if
/// out of range. Keeping ids with the newsroom that minted them is the
/// caller's responsibility.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AuthorId {
    /// Index into the author registry.
    pub index: u64,
}

impl AuthorId {
    /// Creates a new author id with the given registry index.
    #[must_use]
    pub const fn new(index: u64) -> Self {
        Self { index }
    }
}

impl fmt::Debug for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthorId({})", self.index)
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Author({})", self.index)
    }
}

/// Identifier for a magazine registry entry.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MagazineId {
    /// Index into the magazine registry.
    pub index: u64,
}

impl MagazineId {
    /// Creates a new magazine id with the given registry index.
    #[must_use]
    pub const fn new(index: u64) -> Self {
        Self { index }
    }
}

impl fmt::Debug for MagazineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MagazineId({})", self.index)
    }
}

impl fmt::Display for MagazineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Magazine({})", self.index)
    }
}

/// Identifier for an article registry entry.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArticleId {
    /// Index into the article registry.
    pub index: u64,
}

impl ArticleId {
    /// Creates a new article id with the given registry index.
    #[must_use]
    pub const fn new(index: u64) -> Self {
        Self { index }
    }
}

impl fmt::Debug for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArticleId({})", self.index)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Article({})", self.index)
    }
}
