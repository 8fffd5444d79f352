use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use stratus_login::LoginOptions;
use stratus_remote::DEFAULT_HTTP_TIMEOUT_MS;

fn parse_positive_u64(value: &str) -> Result<u64, String> {
    let parsed = value
        .parse::<u64>()
        .map_err(|error| format!("failed to parse integer: {error}"))?;
    if parsed == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(parsed)
}

#[derive(Debug, Parser)]
#[command(
    name = "stratus",
    about = "Log in to a cloud platform and target an org and space",
    version
)]
pub struct Cli {
    #[arg(
        long,
        env = "STRATUS_HOME",
        help = "Directory holding config.json (defaults to $HOME/.stratus)"
    )]
    pub home: Option<PathBuf>,

    #[arg(
        long = "http-timeout-ms",
        env = "STRATUS_HTTP_TIMEOUT_MS",
        default_value_t = DEFAULT_HTTP_TIMEOUT_MS,
        value_parser = parse_positive_u64,
        help = "Timeout for each platform HTTP request"
    )]
    pub http_timeout_ms: u64,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Log in interactively and target an org and space.
    Login(LoginArgs),
    /// Switch to a previously logged-in endpoint.
    Endpoint(EndpointArgs),
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(short = 'a', long = "api", help = "API endpoint (e.g. https://api.example.com)")]
    pub api: Option<String>,

    #[arg(long = "skip-ssl-validation", help = "Skip verification of the API endpoint")]
    pub skip_ssl_validation: bool,

    #[arg(short = 'u', long = "username", help = "Username")]
    pub username: Option<String>,

    #[arg(short = 'p', long = "password", help = "Password")]
    pub password: Option<String>,

    #[arg(short = 'o', long = "org", help = "Org")]
    pub org: Option<String>,

    #[arg(short = 's', long = "space", help = "Space")]
    pub space: Option<String>,

    #[arg(long = "sso", help = "Prompt for a one-time passcode to log in")]
    pub sso: bool,

    #[arg(long = "sso-passcode", help = "One-time passcode")]
    pub sso_passcode: Option<String>,
}

impl LoginArgs {
    pub fn to_login_options(&self) -> LoginOptions {
        LoginOptions {
            endpoint: self.api.clone(),
            skip_ssl_validation: self.skip_ssl_validation,
            username: self.username.clone(),
            password: self.password.clone(),
            organization: self.org.clone(),
            space: self.space.clone(),
            sso: self.sso,
            sso_passcode: self.sso_passcode.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct EndpointArgs {
    #[arg(
        short = 'a',
        long = "auth",
        help = "Substring of a remembered authorization endpoint"
    )]
    pub pattern: String,
}
