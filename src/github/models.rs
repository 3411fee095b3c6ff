// src/github/models.rs
// =============================================================================
// Typed views of the GitHub REST API responses we use.
//
// Only the fields we print are modeled; serde ignores the rest.
// =============================================================================

use serde::{Deserialize, Serialize};

// What kind of entry a contents listing item is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    File,
    Dir,
    Symlink,
    Submodule,
}

// One entry from `GET /repos/{owner}/{repo}/contents/{path}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryContents {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub name: String,
    pub path: String,
    pub sha: String,
    pub size: u64,
    /// Only set when a single file is requested (usually "base64")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

// The contents endpoint answers with an object for a file and an array
// for a directory
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ContentsResponse {
    Listing(Vec<RepositoryContents>),
    Single(Box<RepositoryContents>),
}

impl ContentsResponse {
    pub(crate) fn into_vec(self) -> Vec<RepositoryContents> {
        match self {
            ContentsResponse::Listing(entries) => entries,
            ContentsResponse::Single(entry) => vec![*entry],
        }
    }
}

// A user profile from `GET /users/{username}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub id: u64,
    /// "User" or "Organization"
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_repos: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_listing_deserializes() {
        let json = r#"[
            {"type": "file", "name": "README.md", "path": "README.md", "sha": "abc", "size": 12,
             "download_url": "https://raw.githubusercontent.com/o/r/main/README.md"},
            {"type": "dir", "name": "src", "path": "src", "sha": "def", "size": 0, "download_url": null}
        ]"#;
        let entries = serde_json::from_str::<ContentsResponse>(json).unwrap().into_vec();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, ContentKind::File);
        assert_eq!(entries[1].kind, ContentKind::Dir);
        assert_eq!(entries[1].download_url, None);
    }

    #[test]
    fn test_single_file_becomes_one_entry() {
        let json = r#"{"type": "file", "name": "a.cwl", "path": "x/a.cwl", "sha": "1",
                       "size": 3, "encoding": "base64", "content": "YWJj\n", "extra": true}"#;
        let entries = serde_json::from_str::<ContentsResponse>(json).unwrap().into_vec();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "x/a.cwl");
        assert_eq!(entries[0].encoding.as_deref(), Some("base64"));
    }

    #[test]
    fn test_user_with_null_fields() {
        let json = r#"{"login": "octocat", "id": 1, "type": "User", "name": null,
                       "company": "@github", "public_repos": 8}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.login, "octocat");
        assert_eq!(user.name, None);
        assert_eq!(user.company.as_deref(), Some("@github"));
        assert_eq!(user.public_repos, Some(8));
    }
}
