//! Newsroom state: the composition root that owns every registry.
//!
//! A `Newsroom` is the unified interface to the author, magazine, and article
//! stores. Cross-registry invariants (an article's references must resolve)
//! are enforced here, before any sub-store is touched; each newsroom is an
//! independent graph, so tests and embedders can run several side by side.

use std::collections::HashSet;

use masthead_foundation::{ArticleId, AuthorId, Error, MagazineId, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::article::{Article, ArticleStore};
use crate::author::{Author, AuthorStore};
use crate::magazine::{Magazine, MagazineStore};

/// Authors with strictly more than this many articles in a single magazine
/// count as contributing authors.
pub const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

/// Owns the three entity registries and answers relationship queries.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Newsroom {
    authors: AuthorStore,
    magazines: MagazineStore,
    articles: ArticleStore,
}

impl Newsroom {
    /// Creates a new empty newsroom.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Construction ---

    /// Registers a new author.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn add_author(&mut self, name: impl Into<String>) -> Result<AuthorId> {
        self.authors.add(name)
    }

    /// Registers a new magazine.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not 2 to 16 characters long, or the
    /// category is empty.
    pub fn add_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<MagazineId> {
        self.magazines.add(name, category)
    }

    /// Registers a new article by `author` in `magazine`.
    ///
    /// On any failure nothing is appended: the references are validated
    /// before the article store is touched.
    ///
    /// # Errors
    ///
    /// Returns an error if either reference does not resolve in this
    /// newsroom, or the title is not 5 to 50 characters long.
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<ArticleId> {
        self.authors.validate(author)?;
        self.magazines.validate(magazine)?;
        self.articles.add(author, magazine, title)
    }

    // --- Accessors ---

    /// Gets an author by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not resolve.
    pub fn author(&self, id: AuthorId) -> Result<&Author> {
        self.authors.get(id)
    }

    /// Gets a magazine by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not resolve.
    pub fn magazine(&self, id: MagazineId) -> Result<&Magazine> {
        self.magazines.get(id)
    }

    /// Gets an article by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not resolve.
    pub fn article(&self, id: ArticleId) -> Result<&Article> {
        self.articles.get(id)
    }

    /// Returns the number of registered authors.
    #[must_use]
    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    /// Returns the number of registered magazines.
    #[must_use]
    pub fn magazine_count(&self) -> usize {
        self.magazines.len()
    }

    /// Returns the number of registered articles.
    #[must_use]
    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    // --- Mutation ---

    /// Rejects an author rename. Names are fixed at creation.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the id does not resolve, an
    /// immutable-field error otherwise. The record is never changed.
    pub fn set_author_name(&mut self, id: AuthorId, _name: &str) -> Result<()> {
        self.authors.validate(id)?;
        Err(Error::immutable_field("author name"))
    }

    /// Renames a magazine, applying the same validation as construction.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not resolve or the new name is out of
    /// bounds.
    pub fn set_magazine_name(&mut self, id: MagazineId, name: impl Into<String>) -> Result<()> {
        self.magazines.set_name(id, name)
    }

    /// Recategorizes a magazine, applying the same validation as construction.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not resolve or the new category is
    /// empty.
    pub fn set_magazine_category(
        &mut self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> Result<()> {
        self.magazines.set_category(id, category)
    }

    /// Reassigns an article to a different author.
    ///
    /// The change is visible to every subsequent relationship query, for
    /// both the old and the new author.
    ///
    /// # Errors
    ///
    /// Returns an error if the article id or the new author id does not
    /// resolve in this newsroom.
    pub fn set_article_author(&mut self, id: ArticleId, author: AuthorId) -> Result<()> {
        self.articles.validate(id)?;
        self.authors.validate(author)?;
        self.articles.set_author(id, author)
    }

    /// Moves an article to a different magazine.
    ///
    /// # Errors
    ///
    /// Returns an error if the article id or the new magazine id does not
    /// resolve in this newsroom.
    pub fn set_article_magazine(&mut self, id: ArticleId, magazine: MagazineId) -> Result<()> {
        self.articles.validate(id)?;
        self.magazines.validate(magazine)?;
        self.articles.set_magazine(id, magazine)
    }

    /// Rejects a title write. Titles are fixed at creation.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the id does not resolve, an
    /// immutable-field error otherwise. The record is never changed.
    pub fn set_article_title(&mut self, id: ArticleId, title: &str) -> Result<()> {
        self.articles.set_title(id, title)
    }

    // --- Relationship queries ---

    /// Iterates over the ids of all articles by an author, in registry order.
    ///
    /// Empty for an unknown or article-less author.
    pub fn articles_by(&self, author: AuthorId) -> impl Iterator<Item = ArticleId> + '_ {
        self.articles.by_author(author)
    }

    /// Returns the distinct magazines an author has contributed to.
    #[must_use]
    pub fn magazines_of(&self, author: AuthorId) -> HashSet<MagazineId> {
        self.articles
            .iter()
            .filter(|(_, article)| article.author() == author)
            .map(|(_, article)| article.magazine())
            .collect()
    }

    /// Returns the distinct categories covered by an author's magazines, or
    /// `None` when the author has no magazines.
    ///
    /// `None` is the no-data sentinel: the query never returns an empty set.
    #[must_use]
    pub fn topic_areas(&self, author: AuthorId) -> Option<HashSet<String>> {
        let magazines = self.magazines_of(author);
        if magazines.is_empty() {
            return None;
        }

        let areas = magazines
            .into_iter()
            .filter_map(|id| self.magazines.get(id).ok())
            .map(|magazine| magazine.category().to_owned())
            .collect();
        Some(areas)
    }

    /// Iterates over the ids of all articles in a magazine, in registry order.
    pub fn articles_in(&self, magazine: MagazineId) -> impl Iterator<Item = ArticleId> + '_ {
        self.articles.by_magazine(magazine)
    }

    /// Returns the distinct authors with articles in a magazine.
    #[must_use]
    pub fn contributors(&self, magazine: MagazineId) -> HashSet<AuthorId> {
        self.articles
            .iter()
            .filter(|(_, article)| article.magazine() == magazine)
            .map(|(_, article)| article.author())
            .collect()
    }

    /// Returns the titles of a magazine's articles in registry order, or
    /// `None` when the magazine has no articles.
    #[must_use]
    pub fn article_titles(&self, magazine: MagazineId) -> Option<Vec<String>> {
        let titles: Vec<String> = self
            .articles
            .iter()
            .filter(|(_, article)| article.magazine() == magazine)
            .map(|(_, article)| article.title().to_owned())
            .collect();
        if titles.is_empty() { None } else { Some(titles) }
    }

    /// Returns the authors with strictly more than
    /// [`CONTRIBUTING_AUTHOR_THRESHOLD`] articles in a magazine, in
    /// first-contribution order, or `None` when no author qualifies.
    #[must_use]
    pub fn contributing_authors(&self, magazine: MagazineId) -> Option<Vec<AuthorId>> {
        // Counted in first-appearance order
        let mut counts: Vec<(AuthorId, usize)> = Vec::new();
        for (_, article) in self
            .articles
            .iter()
            .filter(|(_, article)| article.magazine() == magazine)
        {
            match counts
                .iter_mut()
                .find(|(author, _)| *author == article.author())
            {
                Some((_, count)) => *count += 1,
                None => counts.push((article.author(), 1)),
            }
        }

        let authors: Vec<AuthorId> = counts
            .into_iter()
            .filter(|(_, count)| *count > CONTRIBUTING_AUTHOR_THRESHOLD)
            .map(|(author, _)| author)
            .collect();
        if authors.is_empty() { None } else { Some(authors) }
    }

    /// Returns the magazine with the most articles, or `None` when no
    /// magazine is registered.
    ///
    /// Ties break to the magazine registered first: the running best is only
    /// replaced on a strictly greater count.
    #[must_use]
    pub fn top_publisher(&self) -> Option<MagazineId> {
        let mut best: Option<(MagazineId, usize)> = None;
        for (id, _) in self.magazines.iter() {
            let count = self.articles.by_magazine(id).count();
            let replace = match best {
                None => true,
                Some((_, best_count)) => count > best_count,
            };
            if replace {
                best = Some((id, count));
            }
        }
        best.map(|(id, _)| id)
    }
}
