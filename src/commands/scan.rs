use crate::cli::Cli;
use crate::domain::constants::{EXIT_INDEX_FAILED, EXIT_NO_BASE_URL, TOKEN_ENV};
use crate::domain::models::{OutputRecord, ScanReport, ScanSettings};
use crate::services::config::{clean_base_url, load_config, resolve_settings};
use crate::services::output::{print_json, TsvSink};
use crate::services::probe::HttpProbe;
use crate::services::releases::{ReleaseIndexClient, ReleaseIndexError};
use crate::services::scan::{ScanDriver, ScanPolicy};
use log::info;
use std::io::{BufRead, Write};

/// Runs one scan and returns the process exit code.
pub fn handle_scan(cli: &Cli) -> anyhow::Result<u8> {
    let config = load_config(cli.config.as_deref())?;

    let Some(base_url) = resolve_base_url(cli.base_url.as_deref(), prompt_base_url)? else {
        eprintln!("No base URL provided.");
        return Ok(EXIT_NO_BASE_URL);
    };

    let token = std::env::var(TOKEN_ENV)
        .ok()
        .filter(|t| !t.trim().is_empty());
    let settings = resolve_settings(cli, &config, base_url, token)?;

    let versions = match fetch_versions(&settings) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Failed to fetch GitHub releases for {}: {}", settings.repo, e);
            match e {
                ReleaseIndexError::InvalidToken => {
                    eprintln!("Tip: {TOKEN_ENV} must not contain control characters.")
                }
                _ => eprintln!("Tip: set {TOKEN_ENV} to avoid GitHub rate limits."),
            }
            return Ok(EXIT_INDEX_FAILED);
        }
    };
    info!("{} candidate versions from {}", versions.len(), settings.repo);

    let prober = HttpProbe::new(settings.timeout)?;
    let driver = ScanDriver::new(
        &prober,
        &settings.base_url,
        ScanPolicy::from_settings(&settings),
    );

    let outcome = if settings.json {
        let mut records: Vec<OutputRecord> = Vec::new();
        let outcome = driver.run(&versions, |r| {
            records.push(r.clone());
            Ok(())
        })?;
        print_json(ScanReport {
            mode: outcome.mode,
            found: outcome.found(),
            probed: outcome.probed,
            records,
        })?;
        outcome
    } else {
        let stdout = std::io::stdout();
        let mut sink = TsvSink::new(stdout.lock());
        sink.write_header()?;
        driver.run(&versions, |r| Ok(sink.write_record(r)?))?
    };

    info!(
        "probed {}/{} versions, {} hits, {} rows emitted",
        outcome.probed,
        versions.len(),
        outcome.hits,
        outcome.emitted
    );
    Ok(outcome.exit_code())
}

fn fetch_versions(settings: &ScanSettings) -> Result<Vec<String>, ReleaseIndexError> {
    ReleaseIndexClient::new(&settings.api_base, settings.timeout, settings.token.clone())?
        .fetch_all_tags(&settings.repo)
}

/// Prompts only when no value was given; a given value that cleans to
/// nothing is rejected rather than prompted for.
fn resolve_base_url<F>(arg: Option<&str>, prompt: F) -> std::io::Result<Option<String>>
where
    F: FnOnce() -> std::io::Result<String>,
{
    match arg {
        Some(raw) if !raw.is_empty() => Ok(clean_base_url(raw)),
        _ => Ok(clean_base_url(&prompt()?)),
    }
}

fn prompt_base_url() -> std::io::Result<String> {
    let mut stderr = std::io::stderr();
    write!(stderr, "Enter base URL (e.g. https://sso.example.com): ")?;
    stderr.flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
