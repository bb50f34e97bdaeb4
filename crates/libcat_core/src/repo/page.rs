//! Page-bounding transformation shared by entity access objects.
//!
//! # Responsibility
//! - Turn a base `SELECT` statement into a page-bounded query.
//! - Centralize the offset arithmetic used by every paginated read.
//!
//! # Invariants
//! - Pages are 1-based; page 0 and out-of-range pages yield empty result
//!   sets downstream, never errors.
//! - A `PageRequest` is an immutable per-call value. Callers thread it
//!   through each paginated read explicitly, so concurrent readers can
//!   never observe each other's page.
//!
//! The generated suffix uses SQLite `LIMIT ? OFFSET ?` syntax. Porting to
//! another dialect means porting this module.

/// Rows per page when the caller does not choose a size.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// One page window over an unbounded base query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Creates a request for the given 1-based page with the default size.
    pub fn new(page: u32) -> Self {
        Self::with_size(page, DEFAULT_PAGE_SIZE)
    }

    /// Creates a request for the given 1-based page and page size.
    ///
    /// No range validation is performed; a zero page or a page past the
    /// last row simply produces an empty result set.
    pub fn with_size(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// The requested 1-based page number.
    pub fn page(self) -> u32 {
        self.page
    }

    /// The requested page size.
    pub fn page_size(self) -> u32 {
        self.page_size
    }

    /// Row limit to bind for this page, ready for SQLite.
    ///
    /// Page 0 maps to a zero limit so the statement returns no rows.
    pub fn limit(self) -> i64 {
        if self.page == 0 {
            0
        } else {
            i64::from(self.page_size)
        }
    }

    /// Row offset to bind for this page, ready for SQLite.
    pub fn offset(self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * i64::from(self.page_size)
    }

    /// Appends the bounding clause to a base `SELECT` statement.
    ///
    /// The base query must not carry its own limiting clause; the suffix
    /// must stay the final clause of the statement. Callers bind
    /// [`limit()`](Self::limit) and [`offset()`](Self::offset) in that
    /// order.
    pub fn bound(self, base_sql: &str) -> String {
        format!("{base_sql} LIMIT ? OFFSET ?")
    }
}

/// Number of 1-based pages needed to cover `total_rows` rows.
pub fn page_count(total_rows: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_rows.div_ceil(u64::from(page_size))
}

#[cfg(test)]
mod tests {
    use super::{page_count, PageRequest, DEFAULT_PAGE_SIZE};

    #[test]
    fn first_page_starts_at_offset_zero() {
        let page = PageRequest::with_size(1, 25);
        assert_eq!(page.limit(), 25);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn later_pages_advance_by_page_size() {
        let page = PageRequest::with_size(3, 25);
        assert_eq!(page.limit(), 25);
        assert_eq!(page.offset(), 50);
    }

    #[test]
    fn page_zero_binds_zero_limit() {
        let page = PageRequest::new(0);
        assert_eq!(page.limit(), 0);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn default_size_is_applied() {
        assert_eq!(PageRequest::new(2).page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn bound_appends_suffix_after_where_clause() {
        let page = PageRequest::new(1);
        let sql = page.bound("SELECT * FROM tbl_author WHERE authorName LIKE ?");
        assert_eq!(
            sql,
            "SELECT * FROM tbl_author WHERE authorName LIKE ? LIMIT ? OFFSET ?"
        );
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 2), 0);
        assert_eq!(page_count(3, 2), 2);
        assert_eq!(page_count(4, 2), 2);
        assert_eq!(page_count(5, 2), 3);
        assert_eq!(page_count(5, 0), 0);
    }
}
