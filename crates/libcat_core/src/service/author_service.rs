//! Author use-case service.
//!
//! # Responsibility
//! - Provide stable author entry points for catalog callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::author::{Author, AuthorId, Book, BookId};
use crate::repo::author_repo::{AuthorRepository, RepoResult};
use crate::repo::page::PageRequest;

/// Use-case service wrapper for author catalog operations.
pub struct AuthorService<R: AuthorRepository> {
    repo: R,
}

impl<R: AuthorRepository> AuthorService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates an author and returns the store-assigned identity.
    pub fn create_author(&self, name: impl Into<String>) -> RepoResult<AuthorId> {
        self.repo.create_returning_id(&Author::new(name))
    }

    /// Creates an author and links the given books in one use-case.
    ///
    /// # Contract
    /// - The author row is inserted first; links follow one by one.
    /// - Linking is not atomic: a failure partway through leaves the
    ///   author created and earlier links persisted. Callers needing
    ///   stronger guarantees must compensate.
    pub fn create_author_with_books(
        &self,
        name: impl Into<String>,
        books: Vec<Book>,
    ) -> RepoResult<AuthorId> {
        let mut author = Author::new(name);
        author.books = books;

        let author_id = self.repo.create_returning_id(&author)?;
        author.author_id = Some(author_id);
        self.repo.link_books(&author)?;
        Ok(author_id)
    }

    /// Renames an existing author; a no-op when the id matches no row.
    pub fn rename_author(&self, author_id: AuthorId, name: impl Into<String>) -> RepoResult<()> {
        self.repo.update(&Author::with_id(author_id, name))
    }

    /// Removes an author together with its association rows.
    ///
    /// Links are removed first so the author delete cannot trip the
    /// association table's foreign keys.
    pub fn remove_author(&self, author_id: AuthorId) -> RepoResult<()> {
        self.repo.unlink_all_books(author_id)?;
        self.repo.delete(author_id)
    }

    /// Links the books carried by the author record.
    pub fn link_books(&self, author: &Author) -> RepoResult<()> {
        self.repo.link_books(author)
    }

    /// Removes all association rows for the given author.
    pub fn unlink_all_books(&self, author_id: AuthorId) -> RepoResult<()> {
        self.repo.unlink_all_books(author_id)
    }

    /// Gets one author by id.
    pub fn get_author(&self, author_id: AuthorId) -> RepoResult<Option<Author>> {
        self.repo.read_by_id(author_id)
    }

    /// Lists all authors in store order.
    pub fn list_authors(&self) -> RepoResult<Vec<Author>> {
        self.repo.read_all()
    }

    /// Lists one page of authors.
    pub fn list_authors_page(&self, page: PageRequest) -> RepoResult<Vec<Author>> {
        self.repo.read_page(page)
    }

    /// Counts all authors.
    pub fn count_authors(&self) -> RepoResult<u64> {
        self.repo.count()
    }

    /// Searches authors whose name contains the given fragment.
    pub fn search_authors(&self, fragment: &str) -> RepoResult<Vec<Author>> {
        self.repo.read_by_name_contains(fragment)
    }

    /// Lists authors linked to the given book.
    pub fn authors_of_book(&self, book_id: BookId) -> RepoResult<Vec<Author>> {
        self.repo.read_by_book_id(book_id)
    }
}
