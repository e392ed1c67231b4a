//! Application module
//!
//! Contains the egui demo application and its theme definitions.

pub mod editor_app;
pub mod theme;

pub use editor_app::EditorApp;
