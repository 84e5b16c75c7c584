//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - HTTP server setup (server)
//! - Configuration loading (config)
//! - Fixture loading (fixtures)
//! - Repository implementations (repositories)
//! - Application state (state)

pub mod config;
pub mod fixtures;
pub mod repositories;
pub mod server;
pub mod state;

pub use repositories::*;
pub use state::AppState;
