//! Change propagation from sockets to their owning nodes.
//!
//! Every socket owns one update hook. The hook runs synchronously inside
//! [`Socket::set`](super::Socket::set) and sees the freshly stored value.
//! There is no cycle detection here: a hook that, directly or through other
//! sockets, sets the socket that triggered it recurses until the stack runs
//! out. Graph owners must not build such setups.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::value::SocketValue;

/// Identifier of the node that owns a socket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Callback fired after a socket value is stored.
///
/// Errors are returned unchanged to the caller of `set`.
pub trait UpdateHook {
    fn on_update(&mut self, node: NodeId, value: &SocketValue) -> anyhow::Result<()>;
}

impl<F> UpdateHook for F
where
    F: FnMut(NodeId, &SocketValue) -> anyhow::Result<()>,
{
    fn on_update(&mut self, node: NodeId, value: &SocketValue) -> anyhow::Result<()> {
        self(node, value)
    }
}

/// Hook for sockets whose changes need no reaction.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHook;

impl UpdateHook for NoopHook {
    fn on_update(&mut self, _node: NodeId, _value: &SocketValue) -> anyhow::Result<()> {
        Ok(())
    }
}
