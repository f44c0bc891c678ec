//! Release index retrieval.
//!
//! Walks the paginated `/repos/{repo}/releases` listing, following the `Link`
//! header's `rel="next"` cursor until it is absent, and folds every
//! `tag_name` into an ordered, deduplicated list of normalized versions.

use crate::domain::constants::{
    GITHUB_ACCEPT, GITHUB_API_VERSION, PAGE_DELAY, RELEASES_PER_PAGE, USER_AGENT,
};
use crate::services::tags::normalize_tag;
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, LINK};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum ReleaseIndexError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("malformed release listing from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("token is not usable as an Authorization header value")]
    InvalidToken,
}

#[derive(Debug, Deserialize)]
struct ReleaseEntry {
    #[serde(default)]
    tag_name: Option<String>,
}

/// Normalized versions in first-seen order.
#[derive(Debug, Default)]
pub struct VersionSet {
    versions: Vec<String>,
    seen: HashSet<String>,
}

impl VersionSet {
    /// Returns true when the tag contributed a new version.
    pub fn insert_tag(&mut self, raw: &str) -> bool {
        let version = normalize_tag(raw);
        if version.is_empty() || self.seen.contains(version) {
            return false;
        }
        self.seen.insert(version.to_string());
        self.versions.push(version.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn into_versions(self) -> Vec<String> {
        self.versions
    }
}

/// Parses `<url>; rel="name", <url>; rel="name"` into `rel -> url`.
/// Entries that do not have exactly that shape are ignored.
pub fn parse_link_header(link: &str) -> HashMap<String, String> {
    let mut out = HashMap::new();
    for part in link.split(',') {
        if let Some((url, rel)) = parse_link_entry(part.trim()) {
            out.insert(rel.to_string(), url.to_string());
        }
    }
    out
}

fn parse_link_entry(entry: &str) -> Option<(&str, &str)> {
    let rest = entry.strip_prefix('<')?;
    let (url, rest) = rest.split_once('>')?;
    let rel = rest
        .strip_prefix(';')?
        .trim_start()
        .strip_prefix("rel=\"")?
        .strip_suffix('"')?;
    if url.is_empty() || rel.is_empty() || rel.contains('"') {
        return None;
    }
    Some((url, rel))
}

pub struct ReleaseIndexClient {
    http: Client,
    api_base: String,
    token: Option<String>,
    page_delay: Duration,
}

impl ReleaseIndexClient {
    pub fn new(
        api_base: &str,
        timeout: Duration,
        token: Option<String>,
    ) -> Result<Self, ReleaseIndexError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            token,
            page_delay: PAGE_DELAY,
        })
    }

    pub fn first_page_url(&self, repo: &str) -> String {
        format!(
            "{}/repos/{}/releases?per_page={}&page=1",
            self.api_base, repo, RELEASES_PER_PAGE
        )
    }

    fn headers(&self) -> Result<HeaderMap, ReleaseIndexError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        headers.insert(
            HeaderName::from_static("x-github-api-version"),
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        if let Some(token) = &self.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ReleaseIndexError::InvalidToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// Fetches every release page for `repo`. Any failure aborts the whole
    /// retrieval; there is no partial result.
    pub fn fetch_all_tags(&self, repo: &str) -> Result<Vec<String>, ReleaseIndexError> {
        let headers = self.headers()?;
        let mut versions = VersionSet::default();
        let mut visited = HashSet::new();
        let mut next = Some(self.first_page_url(repo));

        while let Some(url) = next.take() {
            visited.insert(url.clone());
            debug!("fetching release page {url}");
            let resp = self
                .http
                .get(&url)
                .headers(headers.clone())
                .send()?
                .error_for_status()?;
            let link = resp
                .headers()
                .get(LINK)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = resp.text()?;
            let page: Vec<ReleaseEntry> =
                serde_json::from_str(&body).map_err(|source| ReleaseIndexError::Decode {
                    url: url.clone(),
                    source,
                })?;

            let before = versions.len();
            for release in &page {
                versions.insert_tag(release.tag_name.as_deref().unwrap_or(""));
            }
            debug!(
                "page had {} releases, {} new versions",
                page.len(),
                versions.len() - before
            );

            next = link
                .as_deref()
                .map(parse_link_header)
                .and_then(|mut rels| rels.remove("next"));
            if let Some(n) = &next {
                if visited.contains(n) {
                    debug!("next page {n} already fetched; stopping");
                    next = None;
                }
            }

            if !self.page_delay.is_zero() {
                std::thread::sleep(self.page_delay);
            }
        }

        Ok(versions.into_versions())
    }
}
