//! Repository implementations backed by process memory

pub mod book_repository;
pub mod user_repository;

pub use book_repository::InMemoryBookRepository;
pub use user_repository::InMemoryUserRepository;
