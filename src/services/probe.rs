//! Content probe: one GET per candidate URL, body hashed while streaming.
//!
//! Any HTTP status is ordinary data here. 4xx/5xx bodies are hashed the same
//! way as 200 bodies; only a request that yields no response at all turns
//! into the `status 0 / "-" / 0 bytes` sentinel.

use crate::domain::constants::{PROBE_CHUNK_SIZE, USER_AGENT};
use crate::domain::models::ProbeResult;
use log::{debug, warn};
use md5::{Digest, Md5};
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use std::io::{ErrorKind, Read};
use std::time::Duration;

const MAX_REDIRECTS: usize = 10;

/// Seam between the scan driver and the network.
pub trait Prober: Sync {
    fn probe(&self, url: &str) -> ProbeResult;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamDigest {
    pub hex: String,
    pub bytes: u64,
}

#[derive(thiserror::Error, Debug)]
#[error("body read failed after {bytes} bytes: {source}")]
pub struct PartialRead {
    pub bytes: u64,
    #[source]
    pub source: std::io::Error,
}

/// MD5 over everything `reader` yields, read in `PROBE_CHUNK_SIZE` chunks.
pub fn digest_stream<R: Read>(reader: &mut R) -> Result<StreamDigest, PartialRead> {
    let mut hasher = Md5::new();
    let mut buf = vec![0u8; PROBE_CHUNK_SIZE];
    let mut bytes = 0u64;
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                hasher.update(&buf[..n]);
                bytes += n as u64;
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => return Err(PartialRead { bytes, source }),
        }
    }
    Ok(StreamDigest {
        hex: hex::encode(hasher.finalize()),
        bytes,
    })
}

pub struct HttpProbe {
    http: Client,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self { http })
    }
}

impl Prober for HttpProbe {
    fn probe(&self, url: &str) -> ProbeResult {
        let mut resp = match self.http.get(url).send() {
            Ok(resp) => resp,
            Err(e) => {
                debug!("no response from {url}: {e}");
                return ProbeResult::unreachable();
            }
        };
        let status = resp.status().as_u16();
        match digest_stream(&mut resp) {
            Ok(d) => ProbeResult {
                status,
                digest: Some(d.hex),
                bytes: d.bytes,
            },
            // Truncated body: keep status and byte count, drop the digest.
            Err(e) => {
                warn!("{url} (HTTP {status}): {e}");
                ProbeResult {
                    status,
                    digest: None,
                    bytes: e.bytes,
                }
            }
        }
    }
}
