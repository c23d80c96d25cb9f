use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Git command failed: {0}")]
    GitCommandError(String),

    #[error("Malformed status line {line:?}: {reason}")]
    MalformedLine { line: String, reason: &'static str },

    #[error("Repository directory not found: {}", .0.display())]
    RepositoryNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
