use libcat_core::{Author, Book};

#[test]
fn new_author_starts_unpersisted() {
    let author = Author::new("Le Guin");

    assert_eq!(author.author_id, None);
    assert_eq!(author.name, "Le Guin");
    assert!(author.books.is_empty());
    assert!(!author.is_persisted());
}

#[test]
fn with_id_carries_assigned_identity() {
    let author = Author::with_id(42, "Borges");

    assert_eq!(author.author_id, Some(42));
    assert!(author.is_persisted());
}

#[test]
fn author_serialization_uses_expected_wire_fields() {
    let mut author = Author::with_id(7, "Lem");
    author.books.push(Book::new(3, "Solaris"));

    let json = serde_json::to_value(&author).unwrap();
    assert_eq!(json["authorId"], 7);
    assert_eq!(json["authorName"], "Lem");
    assert_eq!(json["books"][0]["bookId"], 3);
    assert_eq!(json["books"][0]["title"], "Solaris");

    let decoded: Author = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, author);
}

#[test]
fn deserialize_without_books_defaults_to_empty_collection() {
    let value = serde_json::json!({
        "authorId": null,
        "authorName": "Eco"
    });

    let decoded: Author = serde_json::from_value(value).unwrap();
    assert_eq!(decoded.author_id, None);
    assert_eq!(decoded.name, "Eco");
    assert!(decoded.books.is_empty());
}
