//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for catalog entities.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Paginated reads take the page as an explicit per-call value; no
//!   repository instance holds page state between calls.
//! - Repository APIs signal absent rows with `Option`, never by panicking
//!   on an empty result set.
//!
//! # See also
//! - docs/architecture/catalog-schema.md

pub mod author_repo;
pub mod page;
