//! Socket module
//!
//! Socket types, the socket type registry, socket instances with clamped
//! values, and the change propagation hooks they fire.

pub mod propagation;
pub mod registry;
#[allow(clippy::module_inception)]
pub mod socket;
pub mod socket_type;
pub mod value;

pub use propagation::{NodeId, NoopHook, UpdateHook};
pub use registry::SocketTypeRegistry;
pub use socket::{Socket, SocketContent, SocketDirection, SocketLink};
pub use socket_type::{
    builtin_socket_types, DrawHint, SocketType, BOOLEAN_SOCKET, FLOAT_SOCKET, INTEGER_SOCKET,
    MESH_SOCKET, TEXTURE_SOCKET,
};
pub use value::{SocketValue, ValueBounds, ValueKind, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE};
