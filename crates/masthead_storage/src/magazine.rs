//! Magazine records and their registry.
//!
//! Magazines are appended to the registry at construction and never removed.
//! Both fields stay mutable, and every mutation re-runs the construction
//! validation before anything is written.

// Allow u64 to usize casts - we target 64-bit systems
#![allow(clippy::cast_possible_truncation)]

use masthead_foundation::{Error, MagazineId, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A publication that articles appear in.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Magazine {
    name: String,
    category: String,
}

impl Magazine {
    /// Minimum magazine name length, in characters.
    pub const NAME_MIN: usize = 2;
    /// Maximum magazine name length, in characters.
    pub const NAME_MAX: usize = 16;

    /// Returns the magazine's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the magazine's category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    fn validate_name(name: &str) -> Result<()> {
        let len = name.chars().count();
        if len < Self::NAME_MIN || len > Self::NAME_MAX {
            return Err(Error::length_out_of_range(
                "magazine name",
                Self::NAME_MIN,
                Self::NAME_MAX,
                len,
            ));
        }
        Ok(())
    }

    fn validate_category(category: &str) -> Result<()> {
        if category.is_empty() {
            return Err(Error::empty_field("magazine category"));
        }
        Ok(())
    }
}

/// Append-only registry of all magazines, in construction order.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MagazineStore {
    magazines: Vec<Magazine>,
}

impl MagazineStore {
    /// Creates a new empty magazine store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new magazine, returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not 2 to 16 characters long, or the
    /// category is empty. Nothing is appended on failure.
    pub fn add(&mut self, name: impl Into<String>, category: impl Into<String>) -> Result<MagazineId> {
        let name = name.into();
        let category = category.into();
        Magazine::validate_name(&name)?;
        Magazine::validate_category(&category)?;

        let id = MagazineId::new(self.magazines.len() as u64);
        self.magazines.push(Magazine { name, category });
        Ok(id)
    }

    /// Gets a magazine by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not resolve in this registry.
    pub fn get(&self, id: MagazineId) -> Result<&Magazine> {
        self.magazines
            .get(id.index as usize)
            .ok_or_else(|| Error::magazine_not_found(id))
    }

    /// Checks if an id resolves in this registry.
    #[must_use]
    pub fn exists(&self, id: MagazineId) -> bool {
        (id.index as usize) < self.magazines.len()
    }

    /// Validates that an id resolves in this registry.
    ///
    /// # Errors
    ///
    /// Returns an error with the offending id if it does not resolve.
    pub fn validate(&self, id: MagazineId) -> Result<()> {
        if self.exists(id) {
            Ok(())
        } else {
            Err(Error::magazine_not_found(id))
        }
    }

    /// Renames a magazine, applying the same validation as construction.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not resolve or the new name is out of
    /// bounds. The record is untouched on failure.
    pub fn set_name(&mut self, id: MagazineId, name: impl Into<String>) -> Result<()> {
        self.validate(id)?;
        let name = name.into();
        Magazine::validate_name(&name)?;
        self.magazines[id.index as usize].name = name;
        Ok(())
    }

    /// Recategorizes a magazine, applying the same validation as construction.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not resolve or the new category is
    /// empty. The record is untouched on failure.
    pub fn set_category(&mut self, id: MagazineId, category: impl Into<String>) -> Result<()> {
        self.validate(id)?;
        let category = category.into();
        Magazine::validate_category(&category)?;
        self.magazines[id.index as usize].category = category;
        Ok(())
    }

    /// Returns the number of registered magazines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.magazines.len()
    }

    /// Returns true if no magazines are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.magazines.is_empty()
    }

    /// Iterates over all magazines in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (MagazineId, &Magazine)> {
        self.magazines
            .iter()
            .enumerate()
            .map(|(idx, magazine)| (MagazineId::new(idx as u64), magazine))
    }
}
