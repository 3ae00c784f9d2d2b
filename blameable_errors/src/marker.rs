//! Marker trait identifying errors raised by the blameable extension.
//!
//! The extension signals failures through ordinary error types; this module
//! adds the one thing they share: a zero-method tag that lets callers catch
//! or branch on "any error from this extension" without enumerating every
//! concrete kind.

use std::error::Error;

use static_assertions::assert_obj_safe;

/// Marker for every error belonging to the blameable extension.
///
/// The trait carries no methods and imposes no obligations beyond being a
/// [`std::error::Error`]. Adopting it is a one-line declaration:
///
/// ```rust
/// use blameable_errors::marker::BlameableError;
/// use thiserror::Error;
///
/// #[derive(Debug, Error)]
/// #[error("listener rejected entity {entity}")]
/// struct ListenerError {
///     entity: String,
/// }
///
/// impl BlameableError for ListenerError {}
/// ```
///
/// The taxonomy is two-level: the marker identifies extension membership,
/// while the concrete type identifies the specific failure and carries its
/// payload. The trait is deliberately left open so downstream code that
/// extends the behavior can enroll its own error types in the family.
///
/// Generic handlers hold `&dyn BlameableError` or
/// `Box<dyn BlameableError + Send + Sync>`; every kind shipped by this
/// crate is `Send + Sync`.
pub trait BlameableError: Error {}

// Zero methods, so trait objects must always be constructible.
assert_obj_safe!(BlameableError);

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;

    #[derive(Debug)]
    struct LocalError;

    impl fmt::Display for LocalError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "local failure")
        }
    }

    impl Error for LocalError {}
    impl BlameableError for LocalError {}

    #[test]
    fn test_adoption_imposes_no_obligations() {
        // An empty impl block is the entire cost of joining the family.
        let err = LocalError;
        let tagged: &dyn BlameableError = &err;
        assert_eq!(tagged.to_string(), "local failure");
    }

    #[test]
    fn test_marker_usable_as_generic_bound() {
        fn family_name<E: BlameableError>(err: &E) -> String {
            err.to_string()
        }
        assert_eq!(family_name(&LocalError), "local failure");
    }

    #[test]
    fn test_boxed_trait_object() {
        let boxed: Box<dyn BlameableError> = Box::new(LocalError);
        assert!(boxed.source().is_none());
    }
}
