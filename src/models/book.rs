use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::ids;

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(deserialize_with = "ids::book_id")]
    pub id: i64,
    pub title: String,
    pub author: String,
    // Kept as a JSON number so `200` stays `200` rather than `200.0`
    pub price: Number,
    pub year: i32,
}

/// Fixture file layout: `{ "books": [...] }`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BookCatalog {
    #[serde(default)]
    pub books: Vec<Book>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_serializes_integer_price_without_fraction() {
        let book: Book = serde_json::from_value(json!({
            "id": "3",
            "title": "Dune",
            "author": "Frank Herbert",
            "price": 200,
            "year": 1965
        }))
        .unwrap();

        assert_eq!(book.id, 3);
        let out = serde_json::to_value(&book).unwrap();
        assert_eq!(out["id"], json!(3));
        assert_eq!(out["price"], json!(200));
    }

    #[test]
    fn test_catalog_defaults_to_empty() {
        let catalog: BookCatalog = serde_json::from_str("{}").unwrap();
        assert!(catalog.books.is_empty());
    }
}
