//! Error types shared by the registries, sockets and menus.

use thiserror::Error;

/// Errors raised while registering catalog entries or wiring sockets.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A socket type with this identifier is already registered.
    #[error("socket type '{0}' is already registered")]
    DuplicateType(String),

    /// A catalog entry with this key is already registered.
    #[error("category '{0}' is already registered")]
    DuplicateCategory(String),

    /// A node type identifier appears in more than one place in the catalog.
    #[error("node type '{id}' is already registered (category '{category}')")]
    DuplicateNodeType { id: String, category: String },

    /// A menu with this identifier is already registered.
    #[error("menu '{0}' is already registered")]
    DuplicateMenu(String),

    /// A descriptor is malformed.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The source socket type is not accepted by the target socket type.
    #[error("socket type '{source_type}' cannot feed '{target_type}'")]
    IncompatibleSocketType {
        target_type: String,
        source_type: String,
    },

    /// A value was written to a socket whose type stores no values.
    #[error("socket '{0}' does not store values")]
    ValuelessSocket(String),

    /// A socket type identifier is not known to the registry.
    #[error("unknown socket type '{0}'")]
    UnknownSocketType(String),
}

impl Error {
    /// Returns true for every flavour of duplicate registration.
    pub fn is_duplicate_registration(&self) -> bool {
        matches!(
            self,
            Error::DuplicateType(_)
                | Error::DuplicateCategory(_)
                | Error::DuplicateNodeType { .. }
                | Error::DuplicateMenu(_)
        )
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_grouping() {
        assert!(Error::DuplicateType("Float".into()).is_duplicate_registration());
        assert!(Error::DuplicateCategory("math_menu".into()).is_duplicate_registration());
        assert!(Error::DuplicateMenu("umog_math_menu".into()).is_duplicate_registration());
        assert!(Error::DuplicateNodeType {
            id: "umog_AddNode".into(),
            category: "math_menu".into(),
        }
        .is_duplicate_registration());

        assert!(!Error::configuration("empty label").is_duplicate_registration());
        assert!(!Error::UnknownSocketType("Vector".into()).is_duplicate_registration());
    }

    #[test]
    fn test_messages() {
        let err = Error::IncompatibleSocketType {
            target_type: "Integer".into(),
            source_type: "Float".into(),
        };
        assert_eq!(err.to_string(), "socket type 'Float' cannot feed 'Integer'");
        assert_eq!(
            Error::configuration("node entry 2 has an empty label").to_string(),
            "invalid configuration: node entry 2 has an empty label"
        );
    }
}
