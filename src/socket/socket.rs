//! Socket instances.
//!
//! A socket is a typed port on one node. It either stores a value or
//! receives a link from another node's output, never both.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use super::propagation::{NodeId, NoopHook, UpdateHook};
use super::registry::SocketTypeRegistry;
use super::socket_type::SocketType;
use super::value::{SocketValue, ValueBounds, ValueKind};
use crate::error::{Error, Result};

/// Direction of a socket on a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocketDirection {
    /// An input socket that receives values or links.
    Input,
    /// An output socket that feeds links.
    Output,
}

impl SocketDirection {
    /// Returns a human-readable name for the socket direction.
    pub fn name(&self) -> &'static str {
        match self {
            SocketDirection::Input => "Input",
            SocketDirection::Output => "Output",
        }
    }
}

/// Reference to the output socket feeding a linked input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocketLink {
    /// Node owning the source socket.
    pub node: NodeId,
    /// Name of the source socket on that node.
    pub socket: String,
    /// Socket type of the source.
    pub type_id: String,
}

/// What a socket currently holds.
#[derive(Clone, Debug, PartialEq)]
pub enum SocketContent {
    /// A stored value, always inside the socket's bounds.
    Value(SocketValue),
    /// An incoming link; the socket has no stored value while linked.
    Link(SocketLink),
    /// Unlinked socket of a type that stores no value (e.g. meshes).
    Empty,
}

/// A typed port on a node.
pub struct Socket {
    name: String,
    node: NodeId,
    direction: SocketDirection,
    type_id: String,
    kind: Option<ValueKind>,
    default_value: Option<SocketValue>,
    bounds: ValueBounds,
    content: SocketContent,
    hook: Box<dyn UpdateHook>,
}

impl Socket {
    /// Creates a socket of `socket_type` owned by `node`.
    ///
    /// The socket starts with the type's default value and bounds, and a
    /// no-op update hook.
    ///
    /// Returns [`Error::Configuration`] if the type's bounds cannot hold its
    /// values (non-finite limits, or no integer inside an integer range).
    pub fn new(
        node: NodeId,
        name: impl Into<String>,
        direction: SocketDirection,
        socket_type: &SocketType,
    ) -> Result<Self> {
        socket_type.validate()?;
        let bounds = socket_type.bounds;
        let default_value = socket_type.default_value.map(|v| v.clamped(&bounds));
        let content = match default_value {
            Some(value) => SocketContent::Value(value),
            None => SocketContent::Empty,
        };

        Ok(Self {
            name: name.into(),
            node,
            direction,
            type_id: socket_type.id.clone(),
            kind: socket_type.value_kind(),
            default_value,
            bounds,
            content,
            hook: Box::new(NoopHook),
        })
    }

    /// Creates an input socket.
    pub fn input(node: NodeId, name: impl Into<String>, socket_type: &SocketType) -> Result<Self> {
        Self::new(node, name, SocketDirection::Input, socket_type)
    }

    /// Creates an output socket.
    pub fn output(node: NodeId, name: impl Into<String>, socket_type: &SocketType) -> Result<Self> {
        Self::new(node, name, SocketDirection::Output, socket_type)
    }

    /// Replaces the update hook.
    pub fn with_hook(mut self, hook: impl UpdateHook + 'static) -> Self {
        self.hook = Box::new(hook);
        self
    }

    /// Overrides the bounds inherited from the socket type.
    pub fn with_bounds(mut self, bounds: ValueBounds) -> Result<Self> {
        self.set_bounds(bounds)?;
        Ok(self)
    }

    /// Changes the bounds and re-clamps the stored and default values.
    ///
    /// This is not a value write, so no propagation happens. Integer sockets
    /// reject ranges without an integer, leaving the socket unchanged.
    pub fn set_bounds(&mut self, bounds: ValueBounds) -> Result<()> {
        match self.kind {
            Some(kind) => bounds.validate_for(kind)?,
            None => bounds.validate()?,
        }
        self.bounds = bounds;
        self.default_value = self.default_value.map(|v| v.clamped(&bounds));
        if let SocketContent::Value(value) = &mut self.content {
            *value = value.clamped(&bounds);
        }
        Ok(())
    }

    /// Stores `value`, clamped into the socket's bounds, then runs the update
    /// hook exactly once, even if the stored value did not change.
    ///
    /// The value is converted to the socket's value kind first. Setting a
    /// linked socket drops the link. Errors from the hook are returned as-is;
    /// the value stays stored.
    pub fn set(&mut self, value: impl Into<SocketValue>) -> anyhow::Result<()> {
        let Some(kind) = self.kind else {
            return Err(Error::ValuelessSocket(self.name.clone()).into());
        };

        let value = value.into().convert_to(kind).clamped(&self.bounds);
        if let SocketContent::Link(link) = &self.content {
            debug!(
                "{} socket '{}' overwritten, dropping link from {}",
                self.node, self.name, link.node
            );
        }
        self.content = SocketContent::Value(value);
        self.hook.on_update(self.node, &value)
    }

    /// Returns the stored value, or `None` while linked or for value-less types.
    pub fn get(&self) -> Option<&SocketValue> {
        match &self.content {
            SocketContent::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Links `source` into this socket.
    ///
    /// # Errors
    ///
    /// [`Error::IncompatibleSocketType`] if this socket's type does not accept
    /// the source type, [`Error::Configuration`] if the directions are wrong.
    /// The socket is left untouched on error.
    pub fn connect_from(&mut self, source: &Socket, registry: &SocketTypeRegistry) -> Result<()> {
        if self.direction != SocketDirection::Input || source.direction != SocketDirection::Output {
            return Err(Error::configuration(format!(
                "links run from an output into an input, got {} '{}' -> {} '{}'",
                source.direction.name(),
                source.name,
                self.direction.name(),
                self.name
            )));
        }
        registry.check_link(&self.type_id, &source.type_id)?;

        self.content = SocketContent::Link(SocketLink {
            node: source.node,
            socket: source.name.clone(),
            type_id: source.type_id.clone(),
        });
        Ok(())
    }

    /// Removes the incoming link and restores the default value.
    pub fn disconnect(&mut self) -> Option<SocketLink> {
        let restored = match self.default_value {
            Some(value) => SocketContent::Value(value),
            None => SocketContent::Empty,
        };
        match std::mem::replace(&mut self.content, restored) {
            SocketContent::Link(link) => Some(link),
            previous => {
                self.content = previous;
                None
            }
        }
    }

    pub fn link(&self) -> Option<&SocketLink> {
        match &self.content {
            SocketContent::Link(link) => Some(link),
            _ => None,
        }
    }

    pub fn is_linked(&self) -> bool {
        matches!(self.content, SocketContent::Link(_))
    }

    pub fn content(&self) -> &SocketContent {
        &self.content
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn direction(&self) -> SocketDirection {
        self.direction
    }

    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    pub fn bounds(&self) -> ValueBounds {
        self.bounds
    }

    pub fn value_kind(&self) -> Option<ValueKind> {
        self.kind
    }
}

impl fmt::Debug for Socket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Socket")
            .field("name", &self.name)
            .field("node", &self.node)
            .field("direction", &self.direction)
            .field("type_id", &self.type_id)
            .field("bounds", &self.bounds)
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}
