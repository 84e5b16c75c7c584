//! Issued-books Service - joins borrowers against the catalog

use crate::models::{Book, IssuedBookView, User};

/// List every catalog book currently held by a user, in user order.
///
/// A user whose `issued_book` matches no catalog entry is skipped.
pub fn issued_books(users: &[User], books: &[Book]) -> Vec<IssuedBookView> {
    users
        .iter()
        .filter_map(|user| {
            let book_id = user.issued_book?;
            let book = books.iter().find(|book| book.id == book_id)?;

            Some(IssuedBookView {
                book: book.clone(),
                issued_by: user.name.clone(),
                issued_date: user.issued_date.clone(),
                return_date: user.return_date.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubscriptionType;

    fn book(id: i64, title: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: "Anon".to_string(),
            price: 100.into(),
            year: 2001,
        }
    }

    fn user(id: &str, issued_book: Option<i64>) -> User {
        User {
            id: id.to_string(),
            name: format!("name-{}", id),
            surname: "Doe".to_string(),
            email: format!("{}@example.com", id),
            subscription_type: SubscriptionType::Monthly,
            subscription_date: "2024-01-01".to_string(),
            issued_book,
            issued_date: issued_book.map(|_| "2024-02-01".to_string()),
            return_date: issued_book.map(|_| "2024-02-15".to_string()),
        }
    }

    #[test]
    fn test_dangling_reference_is_skipped() {
        let users = vec![user("u1", Some(5)), user("u2", Some(99))];
        let books = vec![book(5, "X")];

        let views = issued_books(&users, &books);

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].book.id, 5);
        assert_eq!(views[0].book.title, "X");
        assert_eq!(views[0].issued_by, "name-u1");
        assert_eq!(views[0].issued_date.as_deref(), Some("2024-02-01"));
        assert_eq!(views[0].return_date.as_deref(), Some("2024-02-15"));
    }

    #[test]
    fn test_empty_when_nobody_borrows() {
        let books = vec![book(1, "A")];

        assert!(issued_books(&[], &books).is_empty());
        assert!(issued_books(&[user("u1", None), user("u2", None)], &books).is_empty());
    }

    #[test]
    fn test_order_follows_users() {
        let users = vec![user("u1", Some(3)), user("u2", None), user("u3", Some(1))];
        let books = vec![book(1, "First"), book(3, "Third")];

        let titles: Vec<_> = issued_books(&users, &books)
            .into_iter()
            .map(|view| view.book.title)
            .collect();

        assert_eq!(titles, vec!["Third", "First"]);
    }

    #[test]
    fn test_view_serializes_book_fields_flat() {
        let users = vec![user("u1", Some(2))];
        let books = vec![book(2, "Two")];

        let json = serde_json::to_value(issued_books(&users, &books)).unwrap();

        assert_eq!(json[0]["id"], 2);
        assert_eq!(json[0]["title"], "Two");
        assert_eq!(json[0]["issuedBy"], "name-u1");
        assert_eq!(json[0]["returnDate"], "2024-02-15");
    }
}
