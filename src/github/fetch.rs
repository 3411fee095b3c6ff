// src/github/fetch.rs
// =============================================================================
// This module talks to GitHub over HTTP.
//
// Three operations:
// - List the contents of a path in a repository (REST API)
// - Look up a user profile (REST API)
// - Download a single file as text (raw.githubusercontent.com)
//
// Errors from the HTTP client are handed back to the caller as they are:
// no retries, no fallbacks. A non-2xx status counts as an error.
//
// Rust concepts:
// - async functions: For network I/O
// - Result: For error handling, with the ? operator
// - url::Url: Building URLs without hand-escaping path segments
// =============================================================================

use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use tracing::debug;
use url::Url;

use super::error::{GithubError, Result};
use super::models::{ContentsResponse, RepositoryContents, User};
use super::details::GithubDetails;
use crate::config::GithubApiConfig;

const GITHUB_JSON: &str = "application/vnd.github.v3+json";

// Client for the GitHub endpoints we use
//
// One reqwest Client is created up front and reused for every request
// (it keeps a connection pool internally).
#[derive(Debug, Clone)]
pub struct GitHubService {
    client: Client,
    api_url: Url,
    raw_url: Url,
    credentials: Option<(String, String)>,
}

impl GitHubService {
    // Builds the service from a configuration
    //
    // Fails when authentication is enabled without credentials, or when a
    // base URL is not usable.
    pub fn new(config: &GithubApiConfig) -> Result<Self> {
        let endpoints = config.validate()?;

        // GitHub rejects API requests that have no User-Agent header
        let client = Client::builder().user_agent(config.user_agent.as_str()).build()?;

        Ok(Self {
            client,
            api_url: endpoints.api_url,
            raw_url: endpoints.raw_url,
            credentials: endpoints.credentials,
        })
    }

    // Lists the file(s) at the path described by `details`
    //
    // Calls: GET /repos/{owner}/{repo}/contents/{path}?ref={branch}
    //   - no path (or an empty one) lists the repository root
    //   - no branch means the repository's default branch
    //
    // A directory gives one entry per child; a file gives a single entry.
    #[tracing::instrument(skip(self, details), fields(details = %details))]
    pub async fn get_contents(&self, details: &GithubDetails) -> Result<Vec<RepositoryContents>> {
        let mut url = append_segments(
            &self.api_url,
            ["repos", checked(&details.owner)?, checked(&details.repo_name)?, "contents"],
        );
        if let Some(path) = details.path.as_deref() {
            url = append_segments(&url, path_segments(path)?);
        }
        if let Some(branch) = details.branch.as_deref() {
            url.query_pairs_mut().append_pair("ref", branch);
        }

        debug!(%url, "fetching repository contents");

        let contents = self
            .api_get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<ContentsResponse>()
            .await?
            .into_vec();

        debug!(entries = contents.len(), "fetched repository contents");
        Ok(contents)
    }

    // Looks up a user (or organization) profile
    //
    // Calls: GET /users/{username}
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, username: &str) -> Result<User> {
        let url = append_segments(&self.api_url, ["users", checked(username)?]);
        debug!(%url, "fetching user");

        let user = self
            .api_get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<User>()
            .await?;

        Ok(user)
    }

    // Downloads one file and returns its contents as text
    //
    // The file lives at {raw_url}/{owner}/{repo}/{branch}/{path}, so the
    // details must carry both a branch and a path.
    #[tracing::instrument(skip(self, details), fields(details = %details))]
    pub async fn download_file(&self, details: &GithubDetails) -> Result<String> {
        let content = self.raw_get(details).await?.text().await?;

        debug!(bytes = content.len(), "downloaded file");
        Ok(content)
    }

    // Same as download_file, but keeps the body as raw bytes
    //
    // Use this when saving files: text() would replace invalid UTF-8 in
    // binary files.
    #[tracing::instrument(skip(self, details), fields(details = %details))]
    pub async fn download_bytes(&self, details: &GithubDetails) -> Result<Vec<u8>> {
        let content = self.raw_get(details).await?.bytes().await?;

        debug!(bytes = content.len(), "downloaded file");
        Ok(content.to_vec())
    }

    // Builds the raw download URL for a file
    pub fn raw_file_url(&self, details: &GithubDetails) -> Result<Url> {
        let branch = details
            .branch
            .as_deref()
            .ok_or(GithubError::IncompleteDetails("branch"))?;
        let path = path_segments(details.path.as_deref().unwrap_or(""))?;
        if path.is_empty() {
            return Err(GithubError::IncompleteDetails("path"));
        }

        let url = append_segments(
            &self.raw_url,
            [checked(&details.owner)?, checked(&details.repo_name)?, checked(branch)?],
        );
        Ok(append_segments(&url, path))
    }

    // Sends the GET for a raw file and checks the status
    async fn raw_get(&self, details: &GithubDetails) -> Result<reqwest::Response> {
        let url = self.raw_file_url(details)?;
        debug!(%url, "downloading file");

        Ok(self.client.get(url).send().await?.error_for_status()?)
    }

    // Starts a GET request against the REST API, with credentials if configured
    fn api_get(&self, url: Url) -> RequestBuilder {
        let request = self.client.get(url).header(ACCEPT, GITHUB_JSON);
        match &self.credentials {
            Some((username, password)) => request.basic_auth(username, Some(password)),
            None => request,
        }
    }
}

// Appends path segments to a base URL, percent-encoding each one
//
// Base URLs are checked in config.rs to be http(s) URLs, which always
// accept path segments.
fn append_segments<'a>(base: &Url, segments: impl IntoIterator<Item = &'a str>) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

// Splits a repository path like "docs/guide/intro.md" into its segments,
// skipping empty ones (leading, trailing or doubled slashes)
fn path_segments(path: &str) -> Result<Vec<&str>> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(checked)
        .collect()
}

// Url drops "." and ".." segments when appending them, which would send
// the request somewhere else, so they are refused up front
fn checked(segment: &str) -> Result<&str> {
    match segment {
        "." | ".." => Err(GithubError::DotSegment(segment.to_string())),
        _ => Ok(segment),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does error_for_status() do?
//    - reqwest does not treat 404 or 500 as errors by itself
//    - error_for_status() turns any 4xx/5xx response into a reqwest::Error
//    - The ? after it then returns that error to our caller
//
// 2. Why url::Url instead of format!?
//    - A path like "my docs/a#b.md" contains characters that must be escaped
//    - path_segments_mut().extend(...) escapes each segment for us
//    - query_pairs_mut() does the same for ?ref=...
//
// 3. What is #[tracing::instrument]?
//    - Wraps the function in a tracing span named after the function
//    - Arguments show up in log lines, so we can see which repo failed
//    - skip(self) keeps the client (and credentials) out of the logs
//
// 4. What is impl IntoIterator<Item = &'a str>?
//    - Accepts arrays, Vecs, or iterators of string slices
//    - The caller picks whatever is most convenient
// -----------------------------------------------------------------------------
