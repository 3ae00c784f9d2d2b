//! Blameable Error Family
//!
//! This crate provides the error surface of the blameable entity-attribution
//! extension: a zero-method marker trait that tags every error the extension
//! raises, plus the concrete error kinds that adopt it.
//!
//! # Module Structure
//!
//! - [`marker`] - The [`BlameableError`](marker::BlameableError) marker trait
//! - [`kinds`] - Concrete error kinds (configuration, mapping, persistence)
//! - [`report`] - Source-chain formatting and `tracing` reporting
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! Callers handle "any error from this extension" by bounding on the marker:
//!
//! ```rust
//! use blameable_errors::prelude::*;
//!
//! fn handle(err: &dyn BlameableError) -> String {
//!     error_chain(err)
//! }
//!
//! let err = ConfigurationError::EmptyColumn {
//!     option: "created_by_field".to_string(),
//! };
//! assert!(handle(&err).contains("created_by_field"));
//! ```

pub mod kinds;
pub mod marker;
pub mod prelude;
pub mod report;
