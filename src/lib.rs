//! Masthead - In-memory authors/magazines/articles model
//!
//! This crate re-exports both layers of the Masthead system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: masthead_storage    — Entity registries, relationship queries, newsroom state
//! Layer 0: masthead_foundation — Core types (AuthorId, MagazineId, ArticleId, Error)
//! ```

pub use masthead_foundation as foundation;
pub use masthead_storage as storage;
