//! Catalog domain model.
//!
//! # Responsibility
//! - Define the author/book data holders used by the access layer.
//! - Keep entity shapes aligned with the relational schema naming.
//!
//! # Invariants
//! - An author's identity, once assigned by the store, never changes.
//! - Book references carried by an author are identity-only associations.
//!
//! # See also
//! - docs/architecture/catalog-schema.md

pub mod author;
