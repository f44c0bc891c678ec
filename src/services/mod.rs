//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `tags.rs` — release tag normalization.
//! - `releases.rs` — paginated release index retrieval + version dedupe.
//! - `probe.rs` — single-URL GET with streaming MD5 of the body.
//! - `scan.rs` — per-version probe loop, output policy, exit classification.
//! - `output.rs` — TSV/JSON output helpers.
//! - `config.rs` — config file loading and settings resolution.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod output;
pub mod probe;
pub mod releases;
pub mod scan;
pub mod tags;
