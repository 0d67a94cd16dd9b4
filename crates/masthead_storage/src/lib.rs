//! Entity registries, relationship queries, and newsroom state for Masthead.
//!
//! This crate provides:
//! - [`AuthorStore`], [`MagazineStore`], [`ArticleStore`] - Append-only registries
//! - [`Newsroom`] - The composition root owning all three registries
//!
//! [`AuthorStore`]: author::AuthorStore
//! [`MagazineStore`]: magazine::MagazineStore
//! [`ArticleStore`]: article::ArticleStore
//! [`Newsroom`]: newsroom::Newsroom

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod article;
pub mod author;
pub mod magazine;
pub mod newsroom;

pub use article::{Article, ArticleStore};
pub use author::{Author, AuthorStore};
pub use magazine::{Magazine, MagazineStore};
pub use newsroom::{CONTRIBUTING_AUTHOR_THRESHOLD, Newsroom};
