//! Author and book domain records.
//!
//! # Responsibility
//! - Define the `Author` aggregate persisted by the access layer.
//! - Treat `Book` as an opaque foreign entity referenced by identity.
//!
//! # Invariants
//! - `author_id` stays `None` until the store assigns one on insert.
//! - An assigned `author_id` is immutable for the record's lifetime.
//! - `books` carries association targets only; it is never loaded eagerly
//!   by author reads.
//!
//! # See also
//! - docs/architecture/catalog-schema.md

use serde::{Deserialize, Serialize};

/// Store-generated identity for author rows.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type AuthorId = i64;

/// Store-generated identity for book rows.
pub type BookId = i64;

/// Reference to a book participating in an author association.
///
/// Only the identity matters to this layer; remaining book attributes are
/// owned by the book access object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Stable identity in `tbl_book`.
    pub book_id: BookId,
    /// Display title, carried for caller convenience.
    pub title: String,
}

impl Book {
    /// Creates a book reference by identity.
    pub fn new(book_id: BookId, title: impl Into<String>) -> Self {
        Self {
            book_id,
            title: title.into(),
        }
    }
}

/// Author record as persisted in `tbl_author`.
///
/// Field names serialize in camelCase to match external schema naming
/// (`authorId`, `authorName`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Store-assigned identity; `None` until the row is inserted.
    pub author_id: Option<AuthorId>,
    /// Display name shown in catalog listings.
    #[serde(rename = "authorName")]
    pub name: String,
    /// Books this author should be associated with via `tbl_book_authors`.
    #[serde(default)]
    pub books: Vec<Book>,
}

impl Author {
    /// Creates an unpersisted author with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            author_id: None,
            name: name.into(),
            books: Vec::new(),
        }
    }

    /// Creates an author carrying an already-assigned store identity.
    ///
    /// Used by read paths and by callers updating existing rows.
    pub fn with_id(author_id: AuthorId, name: impl Into<String>) -> Self {
        Self {
            author_id: Some(author_id),
            name: name.into(),
            books: Vec::new(),
        }
    }

    /// Returns whether the store has assigned an identity to this record.
    pub fn is_persisted(&self) -> bool {
        self.author_id.is_some()
    }
}
