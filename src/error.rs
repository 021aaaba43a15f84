use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("resource not found: {}", path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read resource: {0}")]
    ReadError(#[source] io::Error),
    #[error("key not found: {0}")]
    KeyNotFound(String),
}

impl ConfigError {
    pub fn key_not_found(key: &str) -> Self {
        Self::KeyNotFound(key.to_string())
    }
}
