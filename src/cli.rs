use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ak-fingerprint",
    version,
    about = "Find (or enumerate) authentik AdminInterface-{version}.js and print HTTP status + MD5"
)]
pub struct Cli {
    #[arg(long, help = "Base URL, e.g. https://sso.example.com (prompted for when omitted)")]
    pub base_url: Option<String>,
    #[arg(long, help = "GitHub repo to query for releases [default: goauthentik/authentik]")]
    pub repo: Option<String>,
    #[arg(long, help = "Release index API base [default: https://api.github.com]")]
    pub api_base: Option<String>,
    #[arg(long, help = "Network timeout in seconds [default: 30]")]
    pub timeout: Option<f64>,
    #[arg(long, help = "Sleep between requests in seconds [default: 0]")]
    pub sleep: Option<f64>,
    #[arg(long, help = "Probe this many versions concurrently [default: 1]")]
    pub jobs: Option<usize>,
    #[arg(long, help = "Do not stop at first hit; enumerate all versions")]
    pub all: bool,
    #[arg(long = "include-404", help = "Print 404 rows (otherwise they are skipped)")]
    pub include_404: bool,
    #[arg(long, help = "Log checked versions to stderr")]
    pub verbose: bool,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, help = "Config file [default: ~/.config/ak-fingerprint/config.toml]")]
    pub config: Option<PathBuf>,
}
