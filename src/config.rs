// src/config.rs
// =============================================================================
// Settings for talking to GitHub.
//
// Values come from the command line or the environment (see cli.rs). This
// module turns them into a checked configuration the GitHub service can use.
//
// Rust concepts:
// - impl Default: a ready-to-use anonymous configuration
// - Manual Debug impl: so the password never ends up in logs
// =============================================================================

use std::fmt;

use url::Url;

use crate::github::{GithubError, Result};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_RAW_URL: &str = "https://raw.githubusercontent.com";
pub const DEFAULT_USER_AGENT: &str = concat!("gh-dir/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct GithubApiConfig {
    /// Send basic credentials with every API request
    pub authentication: bool,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Base of the REST API
    pub api_url: String,
    /// Base of the raw file host used for downloads
    pub raw_url: String,
    pub user_agent: String,
}

/// A validated configuration, ready to build a client from
#[derive(Debug, Clone)]
pub(crate) struct Endpoints {
    pub api_url: Url,
    pub raw_url: Url,
    pub credentials: Option<(String, String)>,
}

impl Default for GithubApiConfig {
    fn default() -> Self {
        Self {
            authentication: false,
            username: None,
            password: None,
            api_url: DEFAULT_API_URL.to_string(),
            raw_url: DEFAULT_RAW_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl GithubApiConfig {
    /// Checks the credential and endpoint rules and resolves the base URLs
    ///
    /// Credentials are only required (and only used) when authentication is on.
    pub(crate) fn validate(&self) -> Result<Endpoints> {
        let credentials = if self.authentication {
            let username = non_empty(&self.username).ok_or(GithubError::MissingCredentials("username"))?;
            let password = non_empty(&self.password).ok_or(GithubError::MissingCredentials("password"))?;
            Some((username.to_string(), password.to_string()))
        } else {
            None
        };

        Ok(Endpoints {
            api_url: parse_base("API URL", &self.api_url)?,
            raw_url: parse_base("raw content URL", &self.raw_url)?,
            credentials,
        })
    }
}

impl fmt::Debug for GithubApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubApiConfig")
            .field("authentication", &self.authentication)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("raw_url", &self.raw_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// Base URLs must be absolute http(s) URLs so that path segments can be
// appended to them
fn parse_base(name: &'static str, value: &str) -> Result<Url> {
    let bad = |reason: String| GithubError::BadEndpoint {
        name,
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|e| bad(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(bad("expected an http or https URL".to_string()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_anonymous() {
        let endpoints = GithubApiConfig::default().validate().unwrap();
        assert!(endpoints.credentials.is_none());
        assert_eq!(endpoints.api_url.as_str(), "https://api.github.com/");
        assert_eq!(endpoints.raw_url.host_str(), Some("raw.githubusercontent.com"));
    }

    #[test]
    fn test_credentials_ignored_without_authentication() {
        let config = GithubApiConfig {
            username: Some("alice".to_string()),
            password: Some("secret".to_string()),
            ..Default::default()
        };
        assert!(config.validate().unwrap().credentials.is_none());
    }

    #[test]
    fn test_authentication_requires_credentials() {
        let config = GithubApiConfig {
            authentication: true,
            username: Some("alice".to_string()),
            password: Some(String::new()),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GithubError::MissingCredentials("password")));

        let config = GithubApiConfig {
            authentication: true,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GithubError::MissingCredentials("username")));
    }

    #[test]
    fn test_authentication_with_credentials() {
        let config = GithubApiConfig {
            authentication: true,
            username: Some("alice".to_string()),
            password: Some("secret".to_string()),
            ..Default::default()
        };
        let endpoints = config.validate().unwrap();
        assert_eq!(
            endpoints.credentials,
            Some(("alice".to_string(), "secret".to_string()))
        );
    }

    #[test]
    fn test_rejects_bad_endpoints() {
        for api_url in ["not a url", "ftp://example.com", "mailto:someone@example.com"] {
            let config = GithubApiConfig {
                api_url: api_url.to_string(),
                ..Default::default()
            };
            let err = config.validate().unwrap_err();
            assert!(matches!(err, GithubError::BadEndpoint { name: "API URL", .. }), "{api_url}");
        }
    }

    #[test]
    fn test_debug_hides_password() {
        let config = GithubApiConfig {
            password: Some("hunter2".to_string()),
            ..Default::default()
        };
        let printed = format!("{config:?}");
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("<redacted>"));
    }
}
