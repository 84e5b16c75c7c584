//! In-memory implementation of BookRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{BookRepository, DomainError, Patch, apply_patch};
use crate::models::Book;

/// Vec-backed book catalog, seeded once from the fixture file
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookRepository {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_all(&self) -> Result<Vec<Book>, DomainError> {
        Ok(self.books.read().await.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, DomainError> {
        let books = self.books.read().await;
        Ok(books.iter().find(|book| book.id == id).cloned())
    }

    async fn create(&self, book: Book) -> Result<Book, DomainError> {
        let mut books = self.books.write().await;

        if books.iter().any(|existing| existing.id == book.id) {
            return Err(DomainError::Conflict(format!(
                "Book with ID {} already exists",
                book.id
            )));
        }

        books.push(book.clone());
        tracing::debug!(book_id = book.id, total = books.len(), "book added");
        Ok(book)
    }

    async fn update(&self, id: i64, mut patch: Patch) -> Result<Book, DomainError> {
        let mut books = self.books.write().await;
        let slot = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or(DomainError::NotFound)?;

        patch.remove("id");
        let updated = apply_patch(&*slot, patch)?;
        *slot = updated.clone();

        tracing::debug!(book_id = id, "book updated");
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<Book, DomainError> {
        let mut books = self.books.write().await;
        let index = books
            .iter()
            .position(|book| book.id == id)
            .ok_or(DomainError::NotFound)?;

        let removed = books.remove(index);
        tracing::debug!(book_id = id, total = books.len(), "book removed");
        Ok(removed)
    }
}
