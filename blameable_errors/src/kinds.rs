//! Concrete error kinds raised by the blameable extension.
//!
//! Every kind adopts [`BlameableError`], so callers can handle the whole
//! family through one bound while still matching on the specific failure.
//! Kinds whose payloads are plain data also derive serde so they survive
//! transport through job queues and structured logs.

use serde::{Deserialize, Serialize};
use static_assertions::{assert_impl_all, assert_not_impl_any};
use thiserror::Error;

use crate::marker::BlameableError;

/// Invalid or incomplete extension configuration.
///
/// Raised while wiring the behavior up, before any entity is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ConfigurationError {
    /// An attribution column option was set to an empty string.
    #[error("configuration option '{option}' must not be empty")]
    EmptyColumn {
        /// Option name, e.g. `created_by_field`.
        option: String,
    },

    /// An option key the extension does not recognize.
    #[error("unknown configuration option '{option}'")]
    UnknownOption {
        /// The unrecognized key.
        option: String,
    },

    /// An option value outside the accepted set.
    #[error("invalid value '{value}' for configuration option '{option}'")]
    InvalidValue {
        /// Option name.
        option: String,
        /// The rejected value.
        value: String,
    },
}

impl BlameableError for ConfigurationError {}

/// Entity metadata does not support the behavior.
///
/// Raised when the extension inspects an entity's mapping and finds the
/// attribution fields missing or unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MappingError {
    /// The entity does not declare the behavior at all.
    #[error("entity '{entity}' is not mapped as blameable")]
    NotMapped {
        /// Fully qualified entity name.
        entity: String,
    },

    /// A configured attribution field is absent from the entity mapping.
    #[error("entity '{entity}' has no field '{field}'")]
    FieldMissing {
        /// Fully qualified entity name.
        entity: String,
        /// The missing field.
        field: String,
    },

    /// The attribution field exists but its mapped type cannot hold a
    /// user reference.
    #[error("field '{field}' on entity '{entity}' has unsupported type '{ty}'")]
    UnsupportedFieldType {
        /// Fully qualified entity name.
        entity: String,
        /// The offending field.
        field: String,
        /// The mapped type name.
        ty: String,
    },
}

impl BlameableError for MappingError {}

/// Failure while reading or writing attribution data through the
/// storage layer.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The attribution value could not be stored on the entity.
    #[error("failed to store attribution for entity '{entity}': {reason}")]
    StoreFailed {
        /// Fully qualified entity name.
        entity: String,
        /// Storage-layer rejection reason.
        reason: String,
    },

    /// Underlying I/O failure in the storage layer.
    ///
    /// The cause is carried as `source()`, not repeated in the display
    /// string, so chain renderers print it once.
    #[error("storage I/O failure")]
    Io(#[from] std::io::Error),
}

impl BlameableError for PersistenceError {}

// The family tag costs nothing and every kind stays thread-safe.
assert_impl_all!(ConfigurationError: BlameableError, Send, Sync, Clone);
assert_impl_all!(MappingError: BlameableError, Send, Sync, Clone);
assert_impl_all!(PersistenceError: BlameableError, Send, Sync);

// Unrelated error types stay outside the family.
assert_not_impl_any!(std::io::Error: BlameableError);
assert_not_impl_any!(std::fmt::Error: BlameableError);
