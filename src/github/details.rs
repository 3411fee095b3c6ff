// src/github/details.rs
// =============================================================================
// This module parses GitHub directory URLs.
//
// Supported formats:
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo/
//   - https://github.com/owner/repo/tree/branch/path/inside/repo
//
// Everything else (other hosts, http://, odd characters in the owner or
// repository name) is rejected.
//
// Rust concepts:
// - OnceLock: compile the regex the first time it is needed, then reuse it
// - Option<T>: "no match" is None instead of a null value
// - FromStr / Display: parse from and format back into a string
// =============================================================================

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::error::GithubError;

const GITHUB_DIR_PATTERN: &str =
    r"^https://github\.com/([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)/?(?:tree/([^/]+)/(.*))?$";

fn github_dir_regex() -> &'static Regex {
    static GITHUB_DIR_REGEX: OnceLock<Regex> = OnceLock::new();
    // The pattern is a constant, so compiling it cannot fail at runtime
    GITHUB_DIR_REGEX.get_or_init(|| Regex::new(GITHUB_DIR_PATTERN).expect("valid GitHub URL regex"))
}

// The pieces of a GitHub directory URL
//
// `branch` and `path` are only present when the URL has a
// `tree/<branch>/<path>` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GithubDetails {
    pub owner: String,
    pub repo_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl GithubDetails {
    pub fn new(
        owner: impl Into<String>,
        repo_name: impl Into<String>,
        branch: Option<String>,
        path: Option<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo_name: repo_name.into(),
            branch,
            path,
        }
    }

    // Extracts owner, repository, branch and path from a GitHub directory URL
    //
    // Returns None when the URL does not look like one. A single trailing
    // line break (as left by reading a line from a file) is ignored.
    //
    // Example:
    //   "https://github.com/common-workflow-language/workflows/tree/master/tools"
    //   -> owner "common-workflow-language", repo "workflows",
    //      branch "master", path "tools"
    pub fn from_dir_url(url: &str) -> Option<Self> {
        let url = strip_line_break(url);
        let caps = github_dir_regex().captures(url)?;

        // Groups 1 and 2 are not optional in the pattern, so they are always
        // set when the whole pattern matched
        let owner = caps.get(1)?.as_str();
        let repo_name = caps.get(2)?.as_str();
        let branch = caps.get(3).map(|m| m.as_str().to_string());
        let path = caps.get(4).map(|m| m.as_str().to_string());

        Some(Self::new(owner, repo_name, branch, path))
    }
}

fn strip_line_break(url: &str) -> &str {
    url.strip_suffix("\r\n")
        .or_else(|| url.strip_suffix('\n'))
        .or_else(|| url.strip_suffix('\r'))
        .unwrap_or(url)
}

impl FromStr for GithubDetails {
    type Err = GithubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_dir_url(s).ok_or_else(|| GithubError::InvalidUrl(s.to_string()))
    }
}

impl fmt::Display for GithubDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "https://github.com/{}/{}", self.owner, self.repo_name)?;
        if let Some(branch) = &self.branch {
            write!(f, "/tree/{}/{}", branch, self.path.as_deref().unwrap_or(""))?;
        }
        Ok(())
    }
}
