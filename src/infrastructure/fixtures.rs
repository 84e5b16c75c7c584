//! Startup loading of the JSON fixtures that seed the repositories

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::models::{Book, BookCatalog, User, UserDirectory};

#[derive(Debug)]
pub enum FixtureError {
    /// File could not be read
    Io(PathBuf, std::io::Error),
    /// File is not valid fixture JSON
    Parse(PathBuf, serde_json::Error),
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::Io(path, e) => write!(f, "Failed to read {}: {}", path.display(), e),
            FixtureError::Parse(path, e) => {
                write!(f, "Failed to parse {}: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixtureError::Io(_, e) => Some(e),
            FixtureError::Parse(_, e) => Some(e),
        }
    }
}

fn read_fixture<T: DeserializeOwned>(path: &Path) -> Result<T, FixtureError> {
    let raw =
        std::fs::read_to_string(path).map_err(|e| FixtureError::Io(path.to_path_buf(), e))?;
    serde_json::from_str(&raw).map_err(|e| FixtureError::Parse(path.to_path_buf(), e))
}

/// Load `{ "books": [...] }`
pub fn load_books(path: &Path) -> Result<Vec<Book>, FixtureError> {
    let catalog: BookCatalog = read_fixture(path)?;
    tracing::info!("Loaded {} books from {}", catalog.books.len(), path.display());
    Ok(catalog.books)
}

/// Load `{ "users": [...] }`
pub fn load_users(path: &Path) -> Result<Vec<User>, FixtureError> {
    let directory: UserDirectory = read_fixture(path)?;
    tracing::info!("Loaded {} users from {}", directory.users.len(), path.display());
    Ok(directory.users)
}
