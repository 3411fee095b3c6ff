// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 1 = URL did not match, 2 = error)
//
// Rust concepts used:
// - async/await: Because our GitHub requests are network I/O
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - GitHub API settings
mod github;        // src/github/ - URL parsing and the GitHub client
mod logging;       // src/logging.rs - tracing setup

use cli::{Cli, Commands};
use clap::Parser;  // Parser trait enables the parse() method

use anyhow::{Context, Result};
use github::{ContentKind, GitHubService, GithubDetails, RepositoryContents, User};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Main application logic
// Returns:
//   Ok(0) = success
//   Ok(1) = the URL is not a GitHub directory URL
//   Err = anything else went wrong
async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Parse { url, json } => handle_parse(&url, json),
        Commands::Contents { url, json } => {
            // Check the URL before touching any configuration or network
            let Some(details) = match_dir_url(&url) else {
                return Ok(1);
            };
            let service = build_service(&cli.api)?;
            handle_contents(&service, &details, json).await
        }
        Commands::User { username, json } => {
            let service = build_service(&cli.api)?;
            handle_user(&service, &username, json).await
        }
        Commands::Download { url, output } => {
            let Some(details) = match_dir_url(&url) else {
                return Ok(1);
            };
            let service = build_service(&cli.api)?;
            handle_download(&service, &details, output.as_deref()).await
        }
    }
}

// Matches a GitHub directory URL, telling the user when it does not match
fn match_dir_url(url: &str) -> Option<GithubDetails> {
    let details = GithubDetails::from_dir_url(url);
    if details.is_none() {
        eprintln!("❌ Not a GitHub directory URL: {}", url);
    }
    details
}

fn build_service(api: &cli::ApiArgs) -> Result<GitHubService> {
    let config = api.to_config();
    tracing::debug!(?config, "building GitHub client");
    GitHubService::new(&config).context("Could not set up the GitHub client")
}

// Handles the 'parse' subcommand
fn handle_parse(url: &str, json: bool) -> Result<i32> {
    let Some(details) = match_dir_url(url) else {
        return Ok(1);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        println!("Owner:  {}", details.owner);
        println!("Repo:   {}", details.repo_name);
        println!("Branch: {}", details.branch.as_deref().unwrap_or("(default)"));
        println!("Path:   {}", details.path.as_deref().unwrap_or("(root)"));
    }
    Ok(0)
}

// Handles the 'contents' subcommand
async fn handle_contents(service: &GitHubService, details: &GithubDetails, json: bool) -> Result<i32> {
    let contents = service
        .get_contents(details)
        .await
        .with_context(|| format!("Could not list contents of {}", details))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&contents)?);
    } else {
        print_contents_table(&contents);
    }
    Ok(0)
}

// Handles the 'user' subcommand
async fn handle_user(service: &GitHubService, username: &str, json: bool) -> Result<i32> {
    let user = service
        .get_user(username)
        .await
        .with_context(|| format!("Could not fetch user '{}'", username))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&user)?);
    } else {
        print_user(&user);
    }
    Ok(0)
}

// Handles the 'download' subcommand
//
// Saving to a file keeps the exact bytes (binary files included); printing
// to stdout goes through the text download.
async fn handle_download(
    service: &GitHubService,
    details: &GithubDetails,
    output: Option<&std::path::Path>,
) -> Result<i32> {
    match output {
        Some(path) => {
            let content = service
                .download_bytes(details)
                .await
                .with_context(|| format!("Could not download {}", details))?;
            tokio::fs::write(path, &content)
                .await
                .with_context(|| format!("Could not write {}", path.display()))?;
            eprintln!("✅ Saved {} bytes to {}", content.len(), path.display());
        }
        None => {
            let content = service
                .download_file(details)
                .await
                .with_context(|| format!("Could not download {}", details))?;
            print!("{}", content);
        }
    }
    Ok(0)
}

// Prints a directory listing as a human-readable table
fn print_contents_table(contents: &[RepositoryContents]) {
    println!("{:<10} {:>10} {:<60}", "TYPE", "SIZE", "PATH");
    println!("{}", "=".repeat(82));

    for entry in contents {
        // Directories report size 0 from the API, so leave the column blank
        let size = match entry.kind {
            ContentKind::File => entry.size.to_string(),
            _ => String::new(),
        };
        println!("{:<10} {:>10} {:<60}", format_kind(entry.kind), size, entry.path);
    }

    println!();
    let files = contents.iter().filter(|e| e.kind == ContentKind::File).count();
    println!("📊 {} file(s), {} other entr(ies)", files, contents.len() - files);
}

fn format_kind(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::File => "📄 file",
        ContentKind::Dir => "📁 dir",
        ContentKind::Symlink => "🔗 link",
        ContentKind::Submodule => "📦 module",
    }
}

// Prints the interesting parts of a user profile
fn print_user(user: &User) {
    println!("👤 {} ({})", user.login, user.name.as_deref().unwrap_or("no name"));

    let fields = [
        ("Type", user.kind.clone()),
        ("Company", user.company.clone()),
        ("Location", user.location.clone()),
        ("Blog", user.blog.clone()),
        ("Email", user.email.clone()),
        ("Bio", user.bio.clone()),
        ("Profile", user.html_url.clone()),
        ("Public repos", user.public_repos.map(|n| n.to_string())),
        ("Followers", user.followers.map(|n| n.to_string())),
        ("Following", user.following.map(|n| n.to_string())),
        ("Joined", user.created_at.clone()),
    ];

    for (label, value) in fields {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            println!("   {:<13} {}", format!("{}:", label), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gh-dir").chain(args.iter().copied())).unwrap()
    }

    #[tokio::test]
    async fn test_unmatched_url_exits_with_one() {
        // The API URL points nowhere, so reaching the network would be an error (exit 2)
        for args in [
            ["parse", "https://gitlab.com/o/r"],
            ["contents", "https://gitlab.com/o/r"],
            ["download", "https://github.com/o/r/blob/main/a.cwl"],
        ] {
            let mut args = args.to_vec();
            args.extend(["--api-url", "http://127.0.0.1:1", "--raw-url", "http://127.0.0.1:1"]);
            assert_eq!(run(cli(&args)).await.unwrap(), 1, "{args:?}");
        }
    }

    #[tokio::test]
    async fn test_matched_url_reaches_the_client() {
        let result = run(cli(&[
            "contents",
            "https://github.com/o/r",
            "--api-url",
            "http://127.0.0.1:1",
        ]))
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_parse_matching_url_exits_with_zero() {
        assert_eq!(run(cli(&["parse", "https://github.com/o/r/tree/main/docs"])).await.unwrap(), 0);
    }

    #[test]
    fn test_match_dir_url() {
        assert!(match_dir_url("https://github.com/o/r").is_some());
        assert!(match_dir_url("https://example.com/o/r").is_none());
    }
}
