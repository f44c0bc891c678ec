use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Outcome of one GET against a candidate asset URL.
///
/// `status` is 0 when no response was obtained at all. `digest` is `None`
/// when it could not be determined and renders as `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub status: u16,
    pub digest: Option<String>,
    pub bytes: u64,
}

impl ProbeResult {
    pub fn unreachable() -> Self {
        Self {
            status: 0,
            digest: None,
            bytes: 0,
        }
    }

    pub fn digest_display(&self) -> &str {
        self.digest.as_deref().unwrap_or("-")
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutputRecord {
    pub version: String,
    pub http_status: u16,
    pub md5: String,
    pub bytes: u64,
    pub url: String,
}

impl OutputRecord {
    pub fn new(version: &str, url: &str, probe: &ProbeResult) -> Self {
        Self {
            version: version.to_string(),
            http_status: probe.status,
            md5: probe.digest_display().to_string(),
            bytes: probe.bytes,
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanMode {
    FindFirst,
    EnumerateAll,
}

#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub mode: ScanMode,
    pub found: bool,
    pub probed: usize,
    pub records: Vec<OutputRecord>,
}

/// Fully resolved run settings (CLI > config file > defaults).
#[derive(Debug, Clone)]
pub struct ScanSettings {
    pub base_url: String,
    pub repo: String,
    pub api_base: String,
    pub timeout: Duration,
    pub sleep: Duration,
    pub jobs: usize,
    pub enumerate_all: bool,
    pub include_not_found: bool,
    pub json: bool,
    pub token: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub defaults: ConfigDefaults,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigDefaults {
    pub repo: Option<String>,
    pub api_base: Option<String>,
    pub timeout_secs: Option<f64>,
    pub sleep_secs: Option<f64>,
    pub jobs: Option<usize>,
}
