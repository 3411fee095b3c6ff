// src/github/error.rs
// =============================================================================
// Error type for everything in the github module.
//
// HTTP failures are wrapped transparently: the caller sees the original
// reqwest error (its Display and source chain are untouched).
//
// Rust concepts:
// - thiserror: derive macro that implements std::error::Error for us
// - #[from]: generates a From impl so the ? operator converts automatically
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GithubError {
    /// Transport failure or non-success HTTP status from GitHub
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The string is not a GitHub directory URL
    #[error("not a GitHub directory URL: {0}")]
    InvalidUrl(String),

    /// A download needs both a branch and a path
    #[error("GitHub details have no {0}; a file download needs a branch and a path")]
    IncompleteDetails(&'static str),

    /// "." or ".." would be collapsed by URL normalization and change the target
    #[error("'{0}' is not allowed as a segment of a GitHub path")]
    DotSegment(String),

    /// Authentication was switched on without a username or password
    #[error("GitHub API authentication is enabled but no {0} was configured")]
    MissingCredentials(&'static str),

    /// A configured base URL is not an absolute http(s) URL
    #[error("invalid {name} '{value}': {reason}")]
    BadEndpoint {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Result alias used throughout the github module
pub type Result<T> = std::result::Result<T, GithubError>;
