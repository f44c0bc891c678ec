//! Scan driver: one probe per version, in list order, filtered by policy.
//!
//! Find-first emits only the first 200 and stops there. Enumerate-all emits
//! every result that survives the 404 filter and never stops early. With
//! `jobs > 1` versions are probed in windows of `jobs` concurrent requests,
//! but each window's results are still evaluated in list order, so the first
//! 200 *in list order* wins and enumerate-all output keeps list order.

use crate::domain::constants::{ASSET_PATH_PREFIX, ASSET_PATH_SUFFIX, EXIT_NOT_FOUND, EXIT_OK};
use crate::domain::models::{OutputRecord, ProbeResult, ScanMode, ScanSettings};
use crate::services::probe::Prober;
use log::info;
use std::time::Duration;

pub fn asset_url(base_url: &str, version: &str) -> String {
    format!(
        "{}{}{}{}",
        base_url.trim_end_matches('/'),
        ASSET_PATH_PREFIX,
        version,
        ASSET_PATH_SUFFIX
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Skip,
    Emit,
    Terminate,
}

#[derive(Debug, Clone, Copy)]
pub struct ScanPolicy {
    pub enumerate_all: bool,
    pub include_not_found: bool,
    pub delay: Duration,
    pub jobs: usize,
}

impl ScanPolicy {
    pub fn from_settings(settings: &ScanSettings) -> Self {
        Self {
            enumerate_all: settings.enumerate_all,
            include_not_found: settings.include_not_found,
            delay: settings.sleep,
            jobs: settings.jobs,
        }
    }

    pub fn mode(&self) -> ScanMode {
        if self.enumerate_all {
            ScanMode::EnumerateAll
        } else {
            ScanMode::FindFirst
        }
    }

    pub fn classify(&self, status: u16) -> Transition {
        if status == 404 && !self.include_not_found {
            return Transition::Skip;
        }
        match (self.enumerate_all, status) {
            (true, _) => Transition::Emit,
            (false, 200) => Transition::Terminate,
            (false, _) => Transition::Skip,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub mode: ScanMode,
    pub probed: usize,
    pub emitted: usize,
    pub hits: usize,
}

impl ScanOutcome {
    pub fn found(&self) -> bool {
        self.hits > 0
    }

    pub fn exit_code(&self) -> u8 {
        match self.mode {
            ScanMode::EnumerateAll => EXIT_OK,
            ScanMode::FindFirst if self.found() => EXIT_OK,
            ScanMode::FindFirst => EXIT_NOT_FOUND,
        }
    }
}

pub struct ScanDriver<'a, P: Prober> {
    prober: &'a P,
    base_url: String,
    policy: ScanPolicy,
}

impl<'a, P: Prober> ScanDriver<'a, P> {
    pub fn new(prober: &'a P, base_url: &str, policy: ScanPolicy) -> Self {
        Self {
            prober,
            base_url: base_url.trim_end_matches('/').to_string(),
            policy,
        }
    }

    /// Probes `versions` in order, handing every emitted record to `emit`.
    /// Only an `emit` failure aborts the scan.
    pub fn run<F>(&self, versions: &[String], mut emit: F) -> anyhow::Result<ScanOutcome>
    where
        F: FnMut(&OutputRecord) -> anyhow::Result<()>,
    {
        let total = versions.len();
        let window = self.policy.jobs.max(1);
        let mut outcome = ScanOutcome {
            mode: self.policy.mode(),
            probed: 0,
            emitted: 0,
            hits: 0,
        };

        for (w, chunk) in versions.chunks(window).enumerate() {
            let urls: Vec<String> = chunk
                .iter()
                .map(|v| asset_url(&self.base_url, v))
                .collect();
            for (i, version) in chunk.iter().enumerate() {
                info!("checking [{}/{}] {}", w * window + i + 1, total, version);
            }

            let results = self.probe_window(&urls);
            for ((version, url), result) in chunk.iter().zip(&urls).zip(&results) {
                outcome.probed += 1;
                if result.status == 200 {
                    outcome.hits += 1;
                }
                match self.policy.classify(result.status) {
                    Transition::Skip => {}
                    Transition::Emit => {
                        emit(&OutputRecord::new(version, url, result))?;
                        outcome.emitted += 1;
                    }
                    Transition::Terminate => {
                        emit(&OutputRecord::new(version, url, result))?;
                        outcome.emitted += 1;
                        return Ok(outcome);
                    }
                }
            }

            if !self.policy.delay.is_zero() {
                std::thread::sleep(self.policy.delay);
            }
        }

        Ok(outcome)
    }

    fn probe_window(&self, urls: &[String]) -> Vec<ProbeResult> {
        if urls.len() <= 1 {
            return urls.iter().map(|u| self.prober.probe(u)).collect();
        }
        let prober = self.prober;
        std::thread::scope(|s| {
            let handles: Vec<_> = urls
                .iter()
                .map(|u| s.spawn(move || prober.probe(u)))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|_| ProbeResult::unreachable()))
                .collect()
        })
    }
}
