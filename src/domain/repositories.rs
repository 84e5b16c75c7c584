//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::DomainError;
use crate::models::{Book, User};

/// Partial record applied on top of an existing one (`{...existing, ...patch}`)
pub type Patch = Map<String, Value>;

/// Repository trait for Book entity
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find all books, in catalog order
    async fn find_all(&self) -> Result<Vec<Book>, DomainError>;

    /// Find a single book by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, DomainError>;

    /// Append a new book, rejecting duplicate IDs
    async fn create(&self, book: Book) -> Result<Book, DomainError>;

    /// Shallow-merge a patch into an existing book. The ID never changes.
    async fn update(&self, id: i64, patch: Patch) -> Result<Book, DomainError>;

    /// Delete a book by ID, returning the removed record
    async fn delete(&self, id: i64) -> Result<Book, DomainError>;
}

/// Repository trait for User entity
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find all users, in registration order
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Find a single user by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError>;

    /// Append a new user, rejecting duplicate IDs
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Shallow-merge a patch into an existing user. The ID never changes.
    async fn update(&self, id: &str, patch: Patch) -> Result<User, DomainError>;

    /// Delete a user by ID, returning the removed record
    async fn delete(&self, id: &str) -> Result<User, DomainError>;
}

/// Overlay `patch` on the JSON form of `existing` and read the result back.
///
/// Keys in the patch replace keys in the record wholesale; nested values are
/// not merged. Fails with `Validation` when the merged object no longer
/// describes a valid record.
pub fn apply_patch<T>(existing: &T, patch: Patch) -> Result<T, DomainError>
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let mut merged = match serde_json::to_value(existing) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            return Err(DomainError::Internal(
                "record does not serialize to a JSON object".to_string(),
            ));
        }
        Err(e) => return Err(DomainError::Internal(e.to_string())),
    };
    merged.extend(patch);
    Ok(serde_json::from_value(Value::Object(merged))?)
}
