//! Settings resolution: CLI flag > config file > built-in default.

use crate::cli::Cli;
use crate::domain::constants::{DEFAULT_API_BASE, DEFAULT_REPO, DEFAULT_TIMEOUT_SECS};
use crate::domain::models::{ConfigFile, ScanSettings};
use anyhow::{bail, Context};
use log::debug;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/ak-fingerprint/config.toml"))
}

/// An explicit path must exist; the default path is optional.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<ConfigFile> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(ConfigFile::default()),
        },
    };
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = toml::from_str(&raw)
        .with_context(|| format!("parsing config {}", path.display()))?;
    debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Trims whitespace and every trailing `/`; `None` when nothing is left.
pub fn clean_base_url(raw: &str) -> Option<String> {
    let url = raw.trim().trim_end_matches('/');
    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}

pub fn resolve_settings(
    cli: &Cli,
    config: &ConfigFile,
    base_url: String,
    token: Option<String>,
) -> anyhow::Result<ScanSettings> {
    let d = &config.defaults;

    let timeout_secs = cli
        .timeout
        .or(d.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    let timeout = match Duration::try_from_secs_f64(timeout_secs) {
        Ok(t) if !t.is_zero() => t,
        _ => bail!("timeout must be a positive number of seconds, got {timeout_secs}"),
    };

    // Non-positive sleep means no delay.
    let sleep_secs = cli.sleep.or(d.sleep_secs).unwrap_or(0.0);
    let sleep = Duration::try_from_secs_f64(sleep_secs).unwrap_or(Duration::ZERO);

    Ok(ScanSettings {
        base_url,
        repo: cli
            .repo
            .clone()
            .or_else(|| d.repo.clone())
            .unwrap_or_else(|| DEFAULT_REPO.to_string()),
        api_base: cli
            .api_base
            .clone()
            .or_else(|| d.api_base.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        timeout,
        sleep,
        jobs: cli.jobs.or(d.jobs).unwrap_or(1).max(1),
        enumerate_all: cli.all,
        include_not_found: cli.include_404,
        json: cli.json,
        token,
    })
}
