// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every GitHub API setting can be given as a flag or through an environment
// variable (handy in CI, where credentials usually live in the environment).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{GithubApiConfig, DEFAULT_API_URL, DEFAULT_RAW_URL, DEFAULT_USER_AGENT};

#[derive(Parser, Debug)]
#[command(
    name = "gh-dir",
    version,
    about = "Inspect GitHub directory URLs, list repository contents and download files",
    long_about = "gh-dir understands GitHub directory URLs such as \
                  https://github.com/owner/repo/tree/main/docs. It can split them into their parts, \
                  list what is inside through the GitHub API, look up users and download single files."
)]
pub struct Cli {
    /// GitHub API settings shared by all subcommands
    #[command(flatten)]
    pub api: ApiArgs,

    /// Print debug logs to stderr (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct ApiArgs {
    /// Send username/password credentials with API requests
    #[arg(long = "auth", global = true, env = "GITHUB_API_AUTHENTICATION")]
    pub authentication: bool,

    /// GitHub username used when --auth is set
    #[arg(long, global = true, env = "GITHUB_API_USERNAME")]
    pub username: Option<String>,

    /// GitHub password or personal access token used when --auth is set
    #[arg(long, global = true, env = "GITHUB_API_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, global = true, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Base URL of the raw file host used for downloads
    #[arg(long, global = true, env = "GITHUB_RAW_URL", default_value = DEFAULT_RAW_URL)]
    pub raw_url: String,
}

impl ApiArgs {
    pub fn to_config(&self) -> GithubApiConfig {
        GithubApiConfig {
            authentication: self.authentication,
            username: self.username.clone(),
            password: self.password.clone(),
            api_url: self.api_url.clone(),
            raw_url: self.raw_url.clone(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

// URLs are taken as plain strings everywhere: a URL that does not match
// is reported with exit code 1 by main.rs instead of a clap usage error
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a GitHub directory URL into owner, repository, branch and path
    ///
    /// Example: gh-dir parse https://github.com/rust-lang/rust/tree/master/src
    Parse {
        /// GitHub directory URL
        url: String,

        /// Output the details as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the files in a repository directory
    ///
    /// Example: gh-dir contents https://github.com/rust-lang/rust/tree/master/src
    Contents {
        /// GitHub directory URL (repository root or tree/<branch>/<path>)
        url: String,

        /// Output the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a GitHub user's profile
    ///
    /// Example: gh-dir user octocat
    User {
        /// GitHub login name
        username: String,

        /// Output the profile as JSON
        #[arg(long)]
        json: bool,
    },

    /// Download a single file from a repository
    ///
    /// Example: gh-dir download https://github.com/owner/repo/tree/main/README.md
    Download {
        /// GitHub URL of the file (must include tree/<branch>/<path>)
        url: String,

        /// Write the file here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommand() {
        let cli = Cli::try_parse_from(["gh-dir", "parse", "https://github.com/o/r", "--json"]).unwrap();
        match cli.command {
            Commands::Parse { url, json } => {
                assert_eq!(url, "https://github.com/o/r");
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_contents_accepts_any_url_string() {
        let cli = Cli::try_parse_from(["gh-dir", "contents", "https://github.com/o/r/tree/dev/docs"]).unwrap();
        match cli.command {
            Commands::Contents { url, json } => {
                assert_eq!(url, "https://github.com/o/r/tree/dev/docs");
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        // Matching happens later so that a bad URL gets exit code 1
        assert!(Cli::try_parse_from(["gh-dir", "contents", "https://gitlab.com/o/r"]).is_ok());
        assert!(Cli::try_parse_from(["gh-dir", "download", "https://gitlab.com/o/r/a.cwl"]).is_ok());
    }

    #[test]
    fn test_global_api_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "gh-dir",
            "user",
            "octocat",
            "--auth",
            "--username",
            "alice",
            "--password",
            "secret",
            "--api-url",
            "http://localhost:8080",
        ])
        .unwrap();

        let config = cli.api.to_config();
        assert!(config.authentication);
        assert_eq!(config.username.as_deref(), Some("alice"));
        assert_eq!(config.password.as_deref(), Some("secret"));
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.raw_url, DEFAULT_RAW_URL);
    }

    #[test]
    fn test_download_output_flag() {
        let cli = Cli::try_parse_from([
            "gh-dir",
            "download",
            "https://github.com/o/r/tree/main/a.cwl",
            "-o",
            "out.cwl",
        ])
        .unwrap();
        match cli.command {
            Commands::Download { url, output } => {
                assert_eq!(url, "https://github.com/o/r/tree/main/a.cwl");
                assert_eq!(output, Some(PathBuf::from("out.cwl")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
