use crate::collector::{CollectOptions, DEFAULT_MAX_REPO_PAGES};
use crate::error::{Error, Result};
use crate::github::DEFAULT_API_URL;
use crate::report::DEFAULT_OUTPUT_PATH;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const USERNAME_PROMPT: &str = "Enter your GitHub username: ";
const TOKEN_PROMPT: &str = "\nOptional: Enter your GitHub Personal Access Token\n\
    (Increases API rate limit from 60 to 5000 requests/hour)\n\
    Leave empty to skip: ";

/// Collects a GitHub user's public activity into a JSON document for the
/// dashboard page. Without `--username` the tool asks for the username and
/// an optional token on standard input.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// GitHub username to analyze
    #[arg(long = "username")]
    pub username: Option<String>,
    /// Personal access token raising the API rate limit
    #[arg(long = "token", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
    /// Base URL of the GitHub REST API
    #[arg(long = "api_url", env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
    /// Where to write the analytics document read by the dashboard page
    #[arg(long = "output", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
    /// Maximum number of repository pages (100 repositories each)
    #[arg(
        long = "max_repo_pages",
        default_value_t = DEFAULT_MAX_REPO_PAGES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_repo_pages: u32,
    /// Check every repository for a README, CI workflows and tests
    #[arg(long = "repo_health")]
    pub repo_health: bool,
}

impl Args {
    pub fn is_interactive(&self) -> bool {
        self.username.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub token: Option<String>,
    pub api_url: String,
    pub output: PathBuf,
    pub options: CollectOptions,
}

impl Config {
    /// Resolves `args`, asking on `input` for whatever an interactive run
    /// still lacks.
    pub fn from_args<R: BufRead, W: Write>(args: Args, input: &mut R, output: &mut W) -> Result<Self> {
        let interactive = args.is_interactive();
        let username = match args.username {
            Some(username) => username,
            None => prompt(input, output, USERNAME_PROMPT)?,
        };
        let token = match non_empty(args.token) {
            Some(token) => Some(token),
            None if interactive => non_empty(Some(prompt(input, output, TOKEN_PROMPT)?)),
            None => None,
        };

        Ok(Self {
            username,
            token,
            api_url: args.api_url,
            output: args.output,
            options: CollectOptions {
                max_repo_pages: args.max_repo_pages,
                repo_health: args.repo_health,
            },
        })
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    let io_error =
        |error: std::io::Error| Error::InvalidInput(format!("failed to read from standard input: {error}"));
    write!(output, "{message}").map_err(io_error)?;
    output.flush().map_err(io_error)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(io_error)?;
    Ok(line.trim().to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args(username: Option<&str>, token: Option<&str>) -> Args {
        Args {
            username: username.map(String::from),
            token: token.map(String::from),
            api_url: DEFAULT_API_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            max_repo_pages: DEFAULT_MAX_REPO_PAGES,
            repo_health: false,
        }
    }

    #[test]
    fn interactive_run_prompts_for_username_and_token() {
        let mut input = Cursor::new("octocat\nghp_secret\n");
        let mut output = Vec::new();
        let config = Config::from_args(args(None, None), &mut input, &mut output).unwrap();

        assert_eq!(config.username, "octocat");
        assert_eq!(config.token.as_deref(), Some("ghp_secret"));
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Enter your GitHub username"));
        assert!(shown.contains("Leave empty to skip"));
    }

    #[test]
    fn empty_token_line_skips_the_token() {
        let mut input = Cursor::new("octocat\n\n");
        let config = Config::from_args(args(None, None), &mut input, &mut Vec::new()).unwrap();
        assert_eq!(config.token, None);
    }

    #[test]
    fn token_from_environment_is_not_prompted() {
        let mut input = Cursor::new("octocat\n");
        let mut output = Vec::new();
        let config =
            Config::from_args(args(None, Some("ghp_env")), &mut input, &mut output).unwrap();
        assert_eq!(config.token.as_deref(), Some("ghp_env"));
        assert!(!String::from_utf8(output).unwrap().contains("Access Token"));
    }

    #[test]
    fn username_flag_disables_prompts() {
        let mut output = Vec::new();
        let config =
            Config::from_args(args(Some("octocat"), None), &mut Cursor::new(""), &mut output)
                .unwrap();
        assert_eq!(config.username, "octocat");
        assert_eq!(config.token, None);
        assert!(output.is_empty());
    }

    #[test]
    fn closed_stdin_yields_empty_username() {
        let config =
            Config::from_args(args(None, None), &mut Cursor::new(""), &mut Vec::new()).unwrap();
        assert_eq!(config.username, "");
    }

    #[test]
    fn cli_defaults() {
        let args = Args::try_parse_from(["github-analytics"]).unwrap();
        assert!(args.is_interactive());
        assert_eq!(args.output, PathBuf::from("data/analytics.json"));
        assert_eq!(args.max_repo_pages, 10);
        assert!(!args.repo_health);
    }

    #[test]
    fn cli_flags() {
        let args = Args::try_parse_from([
            "github-analytics",
            "--username",
            "octocat",
            "--output",
            "out/analytics.json",
            "--max_repo_pages",
            "3",
            "--repo_health",
        ])
        .unwrap();
        assert_eq!(args.username.as_deref(), Some("octocat"));
        assert_eq!(args.output, PathBuf::from("out/analytics.json"));
        assert_eq!(args.max_repo_pages, 3);
        assert!(args.repo_health);
    }

    #[test]
    fn cli_rejects_zero_repository_pages() {
        let result = Args::try_parse_from([
            "github-analytics",
            "--username",
            "octocat",
            "--max_repo_pages",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_help_describes_every_flag() {
        use clap::CommandFactory;

        let command = Args::command();
        for id in ["username", "token", "api_url", "output", "max_repo_pages", "repo_health"] {
            let arg = command
                .get_arguments()
                .find(|arg| arg.get_id().as_str() == id)
                .unwrap();
            assert!(arg.get_help().is_some(), "flag `{id}` has no help text");
        }
    }
}
