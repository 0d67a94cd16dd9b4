//! Article records: the join entity between authors and magazines.
//!
//! An article links exactly one author to exactly one magazine. The registry
//! is append-only in construction order, and the relationship queries
//! (`by_author`, `by_magazine`) are linear scans over it — no back-pointers
//! are kept on authors or magazines.
//!
//! Reference existence is checked by [`Newsroom`](crate::newsroom::Newsroom);
//! this store only validates article ids and the title format.

// Allow u64 to usize casts - we target 64-bit systems
#![allow(clippy::cast_possible_truncation)]

use masthead_foundation::{ArticleId, AuthorId, Error, MagazineId, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single published article.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Article {
    author: AuthorId,
    magazine: MagazineId,
    /// The article's title. Fixed at creation.
    title: String,
}

impl Article {
    /// Minimum article title length, in characters.
    pub const TITLE_MIN: usize = 5;
    /// Maximum article title length, in characters.
    pub const TITLE_MAX: usize = 50;

    /// Returns the id of the article's author.
    #[must_use]
    pub fn author(&self) -> AuthorId {
        self.author
    }

    /// Returns the id of the magazine the article is published in.
    #[must_use]
    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    /// Returns the article's title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    fn validate_title(title: &str) -> Result<()> {
        let len = title.chars().count();
        if len < Self::TITLE_MIN || len > Self::TITLE_MAX {
            return Err(Error::length_out_of_range(
                "article title",
                Self::TITLE_MIN,
                Self::TITLE_MAX,
                len,
            ));
        }
        Ok(())
    }
}

/// Append-only registry of all articles, in construction order.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArticleStore {
    articles: Vec<Article>,
}

impl ArticleStore {
    /// Creates a new empty article store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new article, returns its id.
    ///
    /// The caller is responsible for having validated that `author` and
    /// `magazine` resolve in their registries.
    ///
    /// # Errors
    ///
    /// Returns an error if the title is not 5 to 50 characters long. Nothing
    /// is appended on failure.
    pub fn add(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<ArticleId> {
        let title = title.into();
        Article::validate_title(&title)?;

        let id = ArticleId::new(self.articles.len() as u64);
        self.articles.push(Article {
            author,
            magazine,
            title,
        });
        Ok(id)
    }

    /// Gets an article by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not resolve in this registry.
    pub fn get(&self, id: ArticleId) -> Result<&Article> {
        self.articles
            .get(id.index as usize)
            .ok_or_else(|| Error::article_not_found(id))
    }

    /// Checks if an id resolves in this registry.
    #[must_use]
    pub fn exists(&self, id: ArticleId) -> bool {
        (id.index as usize) < self.articles.len()
    }

    /// Validates that an id resolves in this registry.
    ///
    /// # Errors
    ///
    /// Returns an error with the offending id if it does not resolve.
    pub fn validate(&self, id: ArticleId) -> Result<()> {
        if self.exists(id) {
            Ok(())
        } else {
            Err(Error::article_not_found(id))
        }
    }

    /// Reassigns an article to a different author.
    ///
    /// The caller is responsible for having validated that `author` resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if the article id does not resolve.
    pub fn set_author(&mut self, id: ArticleId, author: AuthorId) -> Result<()> {
        self.validate(id)?;
        self.articles[id.index as usize].author = author;
        Ok(())
    }

    /// Moves an article to a different magazine.
    ///
    /// The caller is responsible for having validated that `magazine` resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if the article id does not resolve.
    pub fn set_magazine(&mut self, id: ArticleId, magazine: MagazineId) -> Result<()> {
        self.validate(id)?;
        self.articles[id.index as usize].magazine = magazine;
        Ok(())
    }

    /// Rejects a title write. Titles are fixed at creation.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the article id does not resolve, an
    /// immutable-field error otherwise. The record is never changed.
    pub fn set_title(&mut self, id: ArticleId, _title: &str) -> Result<()> {
        self.validate(id)?;
        Err(Error::immutable_field("article title"))
    }

    /// Returns the number of registered articles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Returns true if no articles are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Iterates over all articles in construction order.
    pub fn iter(&self) -> impl Iterator<Item = (ArticleId, &Article)> {
        self.articles
            .iter()
            .enumerate()
            .map(|(idx, article)| (ArticleId::new(idx as u64), article))
    }

    /// Iterates over the ids of all articles by an author, in construction order.
    pub fn by_author(&self, author: AuthorId) -> impl Iterator<Item = ArticleId> + '_ {
        self.iter()
            .filter(move |(_, article)| article.author == author)
            .map(|(id, _)| id)
    }

    /// Iterates over the ids of all articles in a magazine, in construction order.
    pub fn by_magazine(&self, magazine: MagazineId) -> impl Iterator<Item = ArticleId> + '_ {
        self.iter()
            .filter(move |(_, article)| article.magazine == magazine)
            .map(|(id, _)| id)
    }
}
