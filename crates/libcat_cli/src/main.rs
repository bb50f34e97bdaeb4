//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `libcat_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use libcat_core::db::open_db_in_memory;
use libcat_core::{
    page_count, Author, AuthorRepository, PageRequest, SqliteAuthorRepository,
};
use std::error::Error;

const PAGE_SIZE: u32 = 2;

fn main() -> Result<(), Box<dyn Error>> {
    println!("libcat_core version={}", libcat_core::core_version());

    let conn = open_db_in_memory()?;
    let repo = SqliteAuthorRepository::try_new(&conn)?;

    for name in ["Orwell", "Huxley", "Asimov"] {
        repo.create(&Author::new(name))?;
    }

    let total = repo.count()?;
    println!("authors={total}");

    for page_no in 1..=page_count(total, PAGE_SIZE) {
        let page = repo.read_page(PageRequest::with_size(page_no as u32, PAGE_SIZE))?;
        let names: Vec<&str> = page.iter().map(|author| author.name.as_str()).collect();
        println!("page {page_no}: {}", names.join(", "));
    }

    Ok(())
}
