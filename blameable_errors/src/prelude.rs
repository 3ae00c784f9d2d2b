//! Prelude module for common re-exports.
//!
//! This module provides convenient re-exports of the marker trait, the
//! concrete error kinds and the reporting helpers so that consumers can do
//! `use blameable_errors::prelude::*;` without listing individual paths.
//!
//! # Usage
//!
//! ```rust
//! use blameable_errors::prelude::*;
//! ```

// ─── Family marker ──────────────────────────────────────────────────
pub use crate::marker::BlameableError;

// ─── Concrete kinds ─────────────────────────────────────────────────
pub use crate::kinds::{ConfigurationError, MappingError, PersistenceError};

// ─── Diagnostics ────────────────────────────────────────────────────
pub use crate::report::{error_chain, report};
