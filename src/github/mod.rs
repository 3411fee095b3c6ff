// src/github/mod.rs
// =============================================================================
// This module handles everything GitHub-specific.
//
// Submodules:
// - details: Parsing GitHub directory URLs into owner/repo/branch/path
// - fetch: The GitHubService client (contents, users, raw downloads)
// - models: Typed API responses
// - error: The GithubError type shared by all of the above
// =============================================================================

mod details;
mod error;
mod fetch;
mod models;

// Re-export the public API so callers can write `github::GitHubService`
pub use details::GithubDetails;
pub use error::{GithubError, Result};
pub use fetch::GitHubService;
pub use models::{ContentKind, RepositoryContents, User};
