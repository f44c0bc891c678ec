//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `scan.rs` — base URL/credential resolution, release retrieval, probe loop, output.
//!
//! ## Principles
//! - Resolve every input once here and pass it down explicitly.
//! - Delegate business logic to `services/*`.
//! - Keep diagnostics on stderr; stdout carries only TSV or JSON.

pub mod scan;

pub use scan::handle_scan;
