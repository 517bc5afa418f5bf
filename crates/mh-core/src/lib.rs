//! # mh-core
//!
//! Core types shared across myholidays: the error hierarchy, engine
//! settings, and the tracing bootstrap.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Tracing subscriber setup.
pub mod logging;

/// Engine settings (reference year, catalog source).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::EngineSettings;
