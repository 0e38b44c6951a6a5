//! Error types for the listing and detail flows

use std::path::PathBuf;
use thiserror::Error;

/// A slug that does not match `^[a-zA-Z0-9_-]+$`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("invalid slug: {0:?}")]
    Invalid(String),
}

/// Failure while reading or parsing a single post document
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing front-matter block")]
    MissingFrontMatter,

    #[error("malformed front-matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    #[error("invalid content pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("{0:?} is not inside the content directory")]
    OutsideRoot(PathBuf),

    #[error("path is not valid UTF-8: {0:?}")]
    NonUtf8(PathBuf),

    #[error("file name {0:?} is not a valid post identifier")]
    InvalidIdentifier(String),
}

/// Errors surfaced by the blog core
#[derive(Debug, Error)]
pub enum BlogError {
    /// The slug failed the grammar check (400)
    #[error("Invalid slug")]
    InvalidSlug(#[from] SlugError),

    /// Anything that went wrong while resolving a valid slug (404)
    #[error("Post not found")]
    NotFound(String),

    /// A post failed to load while building the listing
    #[error("failed to load post {path:?}: {source}")]
    Enumeration {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    /// A loader task panicked or was cancelled
    #[error("post loader task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl BlogError {
    /// HTTP status equivalent of this error
    pub fn status_code(&self) -> u16 {
        match self {
            BlogError::InvalidSlug(_) => 400,
            BlogError::NotFound(_) => 404,
            BlogError::Enumeration { .. } | BlogError::Task(_) => 500,
        }
    }

    /// Whether the error was caused by the client rather than the content store
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let invalid = BlogError::from(SlugError::Invalid("../secret".to_string()));
        assert_eq!(invalid.status_code(), 400);
        assert_eq!(invalid.to_string(), "Invalid slug");
        assert!(invalid.is_client_error());

        let missing = BlogError::NotFound("missing-post".to_string());
        assert_eq!(missing.status_code(), 404);
        assert_eq!(missing.to_string(), "Post not found");

        let broken = BlogError::Enumeration {
            path: PathBuf::from("posts/a.md"),
            source: LoadError::MissingFrontMatter,
        };
        assert_eq!(broken.status_code(), 500);
        assert!(!broken.is_client_error());
        assert!(broken.to_string().contains("missing front-matter"));
    }
}
