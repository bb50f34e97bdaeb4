//! Author access object contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD, search and paginated read APIs over `tbl_author`.
//! - Maintain the `tbl_book_authors` association rows for an author.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Read paths materialize rows through [`map_author_row`]; the book
//!   collection is never loaded eagerly by author reads.
//! - `update`/`delete` are no-ops when the id matches no row.
//! - `link_books` issues one insert per book with no surrounding
//!   transaction; a mid-loop failure leaves earlier links persisted.
//!
//! # See also
//! - docs/architecture/catalog-schema.md

use crate::db::{migrations, DbError};
use crate::model::author::{Author, AuthorId, BookId};
use crate::repo::page::PageRequest;
use log::debug;
use rusqlite::{params, Connection, Row, Rows};
use std::error::Error;
use std::fmt::{Display, Formatter};

const AUTHOR_SELECT_SQL: &str = "SELECT * FROM tbl_author";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for author persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Operation requires a persisted author but the record has no id.
    MissingId,
    /// The store reported no generated key after an insert.
    MissingGeneratedKey,
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingId => write!(f, "author record has no assigned id"),
            Self::MissingGeneratedKey => {
                write!(f, "store reported no generated key for inserted author")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for author CRUD and association operations.
pub trait AuthorRepository {
    /// Inserts one author row; the store assigns the identity.
    fn create(&self, author: &Author) -> RepoResult<()>;
    /// Inserts one author row and returns the store-generated identity.
    fn create_returning_id(&self, author: &Author) -> RepoResult<AuthorId>;
    /// Rewrites the name of the row matching the author's id.
    fn update(&self, author: &Author) -> RepoResult<()>;
    /// Removes the row matching the given id.
    fn delete(&self, author_id: AuthorId) -> RepoResult<()>;
    /// Inserts one association row per book carried by the author.
    fn link_books(&self, author: &Author) -> RepoResult<()>;
    /// Removes all association rows for the given author.
    fn unlink_all_books(&self, author_id: AuthorId) -> RepoResult<()>;
    /// Reads all authors in store order.
    fn read_all(&self) -> RepoResult<Vec<Author>>;
    /// Reads one page of authors, bounded by the given page request.
    fn read_page(&self, page: PageRequest) -> RepoResult<Vec<Author>>;
    /// Counts all author rows.
    fn count(&self) -> RepoResult<u64>;
    /// Reads authors whose name contains the given fragment.
    fn read_by_name_contains(&self, fragment: &str) -> RepoResult<Vec<Author>>;
    /// Reads one author by id, or `None` when no row matches.
    fn read_by_id(&self, author_id: AuthorId) -> RepoResult<Option<Author>>;
    /// Reads authors linked to the given book via the association table.
    fn read_by_book_id(&self, book_id: BookId) -> RepoResult<Vec<Author>>;
}

/// SQLite-backed author repository.
pub struct SqliteAuthorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAuthorRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_catalog_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl AuthorRepository for SqliteAuthorRepository<'_> {
    fn create(&self, author: &Author) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO tbl_author (authorName) VALUES (?1)",
            [author.name.as_str()],
        )?;
        Ok(())
    }

    fn create_returning_id(&self, author: &Author) -> RepoResult<AuthorId> {
        self.conn.execute(
            "INSERT INTO tbl_author (authorName) VALUES (?1)",
            [author.name.as_str()],
        )?;

        let author_id = self.conn.last_insert_rowid();
        if author_id == 0 {
            return Err(RepoError::MissingGeneratedKey);
        }
        Ok(author_id)
    }

    fn update(&self, author: &Author) -> RepoResult<()> {
        let author_id = author.author_id.ok_or(RepoError::MissingId)?;

        // Zero changed rows is a no-op by contract, not an error.
        self.conn.execute(
            "UPDATE tbl_author SET authorName = ?1 WHERE authorId = ?2",
            params![author.name.as_str(), author_id],
        )?;
        Ok(())
    }

    fn delete(&self, author_id: AuthorId) -> RepoResult<()> {
        self.conn.execute(
            "DELETE FROM tbl_author WHERE authorId = ?1",
            [author_id],
        )?;
        Ok(())
    }

    fn link_books(&self, author: &Author) -> RepoResult<()> {
        let author_id = author.author_id.ok_or(RepoError::MissingId)?;

        // Each insert commits independently; a failure partway through
        // leaves the earlier association rows persisted. The composite
        // primary key rejects re-adding an existing (bookId, authorId)
        // pair instead of duplicating it.
        for book in &author.books {
            self.conn.execute(
                "INSERT INTO tbl_book_authors VALUES (?1, ?2)",
                params![book.book_id, author_id],
            )?;
        }
        Ok(())
    }

    fn unlink_all_books(&self, author_id: AuthorId) -> RepoResult<()> {
        self.conn.execute(
            "DELETE FROM tbl_book_authors WHERE authorId = ?1",
            [author_id],
        )?;
        Ok(())
    }

    fn read_all(&self) -> RepoResult<Vec<Author>> {
        let mut stmt = self.conn.prepare(AUTHOR_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        collect_authors(&mut rows)
    }

    fn read_page(&self, page: PageRequest) -> RepoResult<Vec<Author>> {
        debug!(
            "event=author_read_page module=repo page={} page_size={}",
            page.page(),
            page.page_size()
        );

        let sql = page.bound(AUTHOR_SELECT_SQL);
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params![page.limit(), page.offset()])?;
        collect_authors(&mut rows)
    }

    fn count(&self) -> RepoResult<u64> {
        let count: u64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM tbl_author", [], |row| row.get(0))?;
        Ok(count)
    }

    fn read_by_name_contains(&self, fragment: &str) -> RepoResult<Vec<Author>> {
        // SQLite LIKE is case-insensitive for ASCII letters by default;
        // collation beyond that is store-defined.
        let pattern = format!("%{fragment}%");
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM tbl_author WHERE authorName LIKE ?1")?;
        let mut rows = stmt.query([pattern.as_str()])?;
        collect_authors(&mut rows)
    }

    fn read_by_id(&self, author_id: AuthorId) -> RepoResult<Option<Author>> {
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM tbl_author WHERE authorId = ?1")?;
        let mut rows = stmt.query([author_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(map_author_row(row)?));
        }
        Ok(None)
    }

    fn read_by_book_id(&self, book_id: BookId) -> RepoResult<Vec<Author>> {
        let mut stmt = self.conn.prepare(
            "SELECT * FROM tbl_author
             WHERE authorId IN (SELECT authorId FROM tbl_book_authors WHERE bookId = ?1)",
        )?;
        let mut rows = stmt.query([book_id])?;
        collect_authors(&mut rows)
    }
}

/// Converts one positioned result row into an author record.
///
/// The book collection is left empty; association data is fetched
/// separately through [`AuthorRepository::read_by_book_id`]. A missing or
/// mistyped column surfaces as a fatal extraction failure.
pub fn map_author_row(row: &Row<'_>) -> RepoResult<Author> {
    Ok(Author {
        author_id: Some(row.get("authorId")?),
        name: row.get("authorName")?,
        books: Vec::new(),
    })
}

fn collect_authors(rows: &mut Rows<'_>) -> RepoResult<Vec<Author>> {
    let mut authors = Vec::new();
    while let Some(row) = rows.next()? {
        authors.push(map_author_row(row)?);
    }
    Ok(authors)
}

fn ensure_catalog_connection_ready(conn: &Connection) -> RepoResult<()> {
    let actual_version =
        conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    let expected_version = migrations::latest_version();
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for table in ["tbl_author", "tbl_book", "tbl_book_authors"] {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }

    for column in ["authorId", "authorName"] {
        if !table_has_column(conn, "tbl_author", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "tbl_author",
                column,
            });
        }
    }

    for column in ["bookId", "authorId"] {
        if !table_has_column(conn, "tbl_book_authors", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "tbl_book_authors",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
