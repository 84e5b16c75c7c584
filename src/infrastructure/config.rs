use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8081;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub books_fixture: PathBuf,
    pub users_fixture: PathBuf,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            books_fixture: env::var("BOOKS_FIXTURE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/books.json")),
            users_fixture: env::var("USERS_FIXTURE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/users.json")),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
