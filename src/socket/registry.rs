//! Socket type registry.
//!
//! The registry is the central catalog of socket kinds. Link creation asks
//! it whether a source type may feed a target type.

use std::collections::HashMap;

use log::{debug, info};

use super::socket_type::SocketType;
use crate::error::{Error, Result};

/// Central registry of available socket types.
///
/// Types are kept in registration order and looked up by identifier.
///
/// # Example
///
/// ```ignore
/// let mut registry = SocketTypeRegistry::new();
/// registry.register(float_type)?;
///
/// assert!(registry.is_compatible("FloatSocketType", "IntegerSocketType"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SocketTypeRegistry {
    /// Map of type ID to its index in `types`.
    index: HashMap<String, usize>,
    /// Registered types in registration order.
    types: Vec<SocketType>,
}

impl SocketTypeRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a socket type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateType`] if the identifier is already taken and
    /// [`Error::Configuration`] if the descriptor is malformed. The registry is
    /// left unchanged on error.
    pub fn register(&mut self, socket_type: SocketType) -> Result<()> {
        socket_type.validate()?;

        if self.index.contains_key(&socket_type.id) {
            return Err(Error::DuplicateType(socket_type.id));
        }

        debug!(
            "registering socket type '{}' (data type {})",
            socket_type.id, socket_type.data_type
        );
        self.index.insert(socket_type.id.clone(), self.types.len());
        self.types.push(socket_type);
        Ok(())
    }

    /// Removes a socket type, returning it if it was registered.
    pub fn unregister(&mut self, id: &str) -> Option<SocketType> {
        let position = self.index.remove(id)?;
        let removed = self.types.remove(position);
        for (i, socket_type) in self.types.iter().enumerate().skip(position) {
            self.index.insert(socket_type.id.clone(), i);
        }
        debug!("unregistered socket type '{}'", id);
        Some(removed)
    }

    /// Removes every socket type.
    pub fn clear(&mut self) {
        if !self.types.is_empty() {
            info!("clearing {} socket types", self.types.len());
        }
        self.index.clear();
        self.types.clear();
    }

    /// Looks up a socket type by identifier.
    pub fn get(&self, id: &str) -> Option<&SocketType> {
        self.index.get(id).map(|&i| &self.types[i])
    }

    /// Like [`get`](Self::get) but reports unknown identifiers as an error.
    pub fn require(&self, id: &str) -> Result<&SocketType> {
        self.get(id)
            .ok_or_else(|| Error::UnknownSocketType(id.to_string()))
    }

    /// Returns true if `source` may feed `target`.
    ///
    /// True iff the source's data type equals the target's or is listed in the
    /// target's allowed input types. Unknown identifiers are never compatible.
    pub fn is_compatible(&self, target: &str, source: &str) -> bool {
        match (self.get(target), self.get(source)) {
            (Some(target), Some(source)) => target.accepts(source),
            _ => false,
        }
    }

    /// Validates a prospective link from `source` into `target`.
    pub fn check_link(&self, target: &str, source: &str) -> Result<()> {
        let target_type = self.require(target)?;
        let source_type = self.require(source)?;

        if target_type.accepts(source_type) {
            Ok(())
        } else {
            Err(Error::IncompatibleSocketType {
                target_type: target.to_string(),
                source_type: source.to_string(),
            })
        }
    }

    /// Iterates socket types in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SocketType> {
        self.types.iter()
    }

    /// Returns the number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no types are registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Checks if a type with the given ID is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::socket::socket_type::{
        builtin_socket_types, BOOLEAN_SOCKET, FLOAT_SOCKET, INTEGER_SOCKET, MESH_SOCKET,
    };

    fn builtin_registry() -> SocketTypeRegistry {
        let mut registry = SocketTypeRegistry::new();
        for socket_type in builtin_socket_types() {
            registry.register(socket_type).unwrap();
        }
        registry
    }

    #[test]
    fn test_registry_creation() {
        let registry = SocketTypeRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_register_preserves_order() {
        let registry = builtin_registry();
        let ids: Vec<&str> = registry.iter().map(|t| t.id.as_str()).collect();
        let expected: Vec<String> = builtin_socket_types().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = builtin_registry();
        let before = registry.clone();

        let err = registry
            .register(SocketType::new(FLOAT_SOCKET, "Other Float", "Float"))
            .unwrap_err();
        assert_eq!(err, Error::DuplicateType(FLOAT_SOCKET.to_string()));
        assert_eq!(registry, before);
    }

    #[test]
    fn test_compatibility_is_reflexive() {
        let registry = builtin_registry();
        for socket_type in registry.iter() {
            assert!(registry.is_compatible(&socket_type.id, &socket_type.id));
        }
    }

    #[test]
    fn test_compatibility_is_asymmetric() {
        let registry = builtin_registry();
        assert!(registry.is_compatible(FLOAT_SOCKET, INTEGER_SOCKET));
        assert!(registry.is_compatible(FLOAT_SOCKET, BOOLEAN_SOCKET));
        assert!(!registry.is_compatible(INTEGER_SOCKET, FLOAT_SOCKET));
        assert!(!registry.is_compatible(BOOLEAN_SOCKET, FLOAT_SOCKET));
        assert!(!registry.is_compatible(FLOAT_SOCKET, MESH_SOCKET));
    }

    #[test]
    fn test_explicitly_configured_reverse_direction() {
        let mut registry = SocketTypeRegistry::new();
        registry
            .register(SocketType::new("a", "A", "Float").with_allowed_inputs(["Integer"]))
            .unwrap();
        registry
            .register(SocketType::new("b", "B", "Integer").with_allowed_inputs(["Float"]))
            .unwrap();
        assert!(registry.is_compatible("a", "b"));
        assert!(registry.is_compatible("b", "a"));
    }

    #[test]
    fn test_unknown_types_are_incompatible() {
        let registry = builtin_registry();
        assert!(!registry.is_compatible(FLOAT_SOCKET, "VectorSocketType"));
        assert_eq!(
            registry.check_link("VectorSocketType", FLOAT_SOCKET),
            Err(Error::UnknownSocketType("VectorSocketType".to_string()))
        );
    }

    #[test]
    fn test_check_link() {
        let registry = builtin_registry();
        assert!(registry.check_link(FLOAT_SOCKET, INTEGER_SOCKET).is_ok());
        assert_eq!(
            registry.check_link(INTEGER_SOCKET, FLOAT_SOCKET),
            Err(Error::IncompatibleSocketType {
                target_type: INTEGER_SOCKET.to_string(),
                source_type: FLOAT_SOCKET.to_string(),
            })
        );
    }

    #[test]
    fn test_unregister_reindexes() {
        let mut registry = builtin_registry();
        let removed = registry.unregister(INTEGER_SOCKET).unwrap();
        assert_eq!(removed.id, INTEGER_SOCKET);
        assert!(!registry.contains(INTEGER_SOCKET));
        assert_eq!(registry.get(BOOLEAN_SOCKET).unwrap().id, BOOLEAN_SOCKET);
        assert_eq!(registry.get(MESH_SOCKET).unwrap().id, MESH_SOCKET);
        assert!(registry.unregister(INTEGER_SOCKET).is_none());
    }

    #[test]
    fn test_clear() {
        let mut registry = builtin_registry();
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.get(FLOAT_SOCKET).is_none());
    }
}
