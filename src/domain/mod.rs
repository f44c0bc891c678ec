//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — probe results, emitted records, settings and report structs.
//! - `constants.rs` — endpoints, fixed headers, sizes and exit codes.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! `OutputRecord` and `ScanReport` define the TSV columns and the `--json` schema.
//! Keep changes to them explicit.

pub mod constants;
pub mod models;
