//! Node Sockets Library
//!
//! Socket types with clamped, propagating values, and the node type catalog
//! the node editor's "Add" menu is built from.

pub mod app;
pub mod catalog;
pub mod error;
pub mod menu;
pub mod persistence;
pub mod runtime;
pub mod socket;

pub use error::{Error, Result};
pub use runtime::Runtime;
