//! Error types for set operations.

/// Errors returned by [`OrderedNotifySet`](crate::OrderedNotifySet) operations.
///
/// A failed call never mutates the set and never notifies observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required element argument is absent (see [`Element::is_absent`](crate::Element::is_absent)).
    #[error("argument '{argument}' is absent")]
    InvalidArgument {
        /// Name of the rejected argument.
        argument: &'static str,
    },
    /// The element being inserted is already in the set.
    #[error("element already exists in set")]
    AlreadyExists,
    /// The anchor element of a positional insert is not in the set.
    #[error("anchor element not found in set")]
    NotFound,
    /// The operation needs a non-empty set.
    #[error("cannot get {accessor} element from empty set")]
    InvalidState {
        /// The accessor that was called (`first` or `last`).
        accessor: &'static str,
    },
    /// The operation is not supported by this collection.
    #[error("{operation} is not supported")]
    Unsupported {
        /// Name of the unsupported operation.
        operation: &'static str,
    },
}

/// Result alias for set operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::InvalidArgument { argument: "anchor" }.to_string(),
            "argument 'anchor' is absent"
        );
        assert_eq!(Error::AlreadyExists.to_string(), "element already exists in set");
        assert_eq!(Error::NotFound.to_string(), "anchor element not found in set");
        assert_eq!(
            Error::InvalidState { accessor: "first" }.to_string(),
            "cannot get first element from empty set"
        );
        assert_eq!(
            Error::Unsupported { operation: "copy_to" }.to_string(),
            "copy_to is not supported"
        );
    }
}
