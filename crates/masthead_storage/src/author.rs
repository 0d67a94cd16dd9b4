//! Author records and their registry.
//!
//! The `AuthorStore` is an append-only registry: authors are validated at
//! construction and never removed or renamed afterwards.

// Allow u64 to usize casts - we target 64-bit systems
#![allow(clippy::cast_possible_truncation)]

use masthead_foundation::{AuthorId, Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A writer known to the newsroom.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Author {
    /// The author's name. Fixed at creation.
    name: String,
}

impl Author {
    /// Returns the author's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Append-only registry of all authors.
///
/// Ids are registry indices; since authors are never removed, an id issued by
/// this store stays valid for the store's lifetime.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AuthorStore {
    authors: Vec<Author>,
}

impl AuthorStore {
    /// Creates a new empty author store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new author, returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn add(&mut self, name: impl Into<String>) -> Result<AuthorId> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::empty_field("author name"));
        }

        let id = AuthorId::new(self.authors.len() as u64);
        self.authors.push(Author { name });
        Ok(id)
    }

    /// Gets an author by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not resolve in this registry.
    pub fn get(&self, id: AuthorId) -> Result<&Author> {
        self.authors
            .get(id.index as usize)
            .ok_or_else(|| Error::author_not_found(id))
    }

    /// Checks if an id resolves in this registry.
    #[must_use]
    pub fn exists(&self, id: AuthorId) -> bool {
        (id.index as usize) < self.authors.len()
    }

    /// Validates that an id resolves in this registry.
    ///
    /// # Errors
    ///
    /// Returns an error with the offending id if it does not resolve.
    pub fn validate(&self, id: AuthorId) -> Result<()> {
        if self.exists(id) {
            Ok(())
        } else {
            Err(Error::author_not_found(id))
        }
    }

    /// Returns the number of registered authors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.authors.len()
    }

    /// Returns true if no authors are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    /// Iterates over all authors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (AuthorId, &Author)> {
        self.authors
            .iter()
            .enumerate()
            .map(|(idx, author)| (AuthorId::new(idx as u64), author))
    }
}
