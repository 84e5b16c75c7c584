//! Application state containing repositories and shared resources

use std::sync::Arc;

use crate::domain::{BookRepository, UserRepository};
use crate::infrastructure::{InMemoryBookRepository, InMemoryUserRepository};
use crate::models::{Book, User};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Book repository
    pub book_repo: Arc<dyn BookRepository>,
    /// User repository
    pub user_repo: Arc<dyn UserRepository>,
}

impl AppState {
    /// Create a new AppState with in-memory repositories seeded from `books` and `users`
    pub fn new(books: Vec<Book>, users: Vec<User>) -> Self {
        Self {
            book_repo: Arc::new(InMemoryBookRepository::new(books)),
            user_repo: Arc::new(InMemoryUserRepository::new(users)),
        }
    }
}
