//! Diagnostics for the error family.
//!
//! Extension errors often wrap a lower-level cause (see
//! [`PersistenceError::Io`](crate::kinds::PersistenceError::Io)); these
//! helpers render the full `source()` chain so nothing below the surface
//! message gets lost in logs.

use std::error::Error;

use tracing::error;

/// Render an error and its `source()` chain as a single line.
///
/// Causes are joined with `": "`, outermost first:
///
/// ```rust
/// use blameable_errors::kinds::PersistenceError;
/// use blameable_errors::report::error_chain;
///
/// let io = std::io::Error::other("disk full");
/// let err = PersistenceError::from(io);
/// assert_eq!(error_chain(&err), "storage I/O failure: disk full");
/// ```
pub fn error_chain(err: &(impl Error + ?Sized)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

/// Log an error with its full cause chain at `error` level.
pub fn report(err: &(impl Error + ?Sized)) {
    error!("{}", error_chain(err));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{ConfigurationError, PersistenceError};
    use crate::marker::BlameableError;

    #[test]
    fn test_chain_without_source() {
        let err = ConfigurationError::UnknownOption {
            option: "blame_column".to_string(),
        };
        assert_eq!(
            error_chain(&err),
            "unknown configuration option 'blame_column'"
        );
    }

    #[test]
    fn test_chain_with_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only database");
        let err = PersistenceError::from(io);
        assert_eq!(
            error_chain(&err),
            "storage I/O failure: read-only database"
        );
    }

    #[test]
    fn test_report_without_subscriber_is_noop() {
        let err = ConfigurationError::UnknownOption {
            option: "blame_column".to_string(),
        };
        // No subscriber installed; the event is simply dropped.
        report(&err);
    }

    #[test]
    fn test_chain_accepts_family_trait_object() {
        let err = ConfigurationError::EmptyColumn {
            option: "updated_by_field".to_string(),
        };
        let tagged: &dyn BlameableError = &err;
        assert_eq!(error_chain(tagged), err.to_string());
    }
}
