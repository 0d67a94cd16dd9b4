//! Core types for Masthead.
//!
//! This crate provides:
//! - [`AuthorId`], [`MagazineId`], [`ArticleId`] - Typed registry identifiers
//! - [`Error`] - Error types with field-level detail
//!
//! [`AuthorId`]: id::AuthorId
//! [`MagazineId`]: id::MagazineId
//! [`ArticleId`]: id::ArticleId
//! [`Error`]: error::Error

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod id;

pub use error::{Error, ErrorKind, Result};
pub use id::{ArticleId, AuthorId, MagazineId};
