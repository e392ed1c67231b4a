//! Socket type descriptors.
//!
//! A socket type is shared by every socket of one kind (e.g. Float). It
//! decides which other data types a socket of this kind accepts as a link
//! source, how it is drawn, and what value it stores when unlinked.

use egui::{Color32, Rgba};
use serde::{Deserialize, Serialize};

use super::value::{SocketValue, ValueBounds, ValueKind};
use crate::error::{Error, Result};

/// How the editor should draw a socket's inline value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawHint {
    /// Editable text/number field.
    #[default]
    TextProperty,
    /// Property widget without a text label.
    PropertyOnly,
    /// Label only, no editable value.
    TextOnly,
}

/// Descriptor shared by all sockets of one kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocketType {
    /// Unique identifier (e.g. "FloatSocketType").
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// Data type tag (e.g. "Float").
    pub data_type: String,
    /// Data type tags accepted as link sources, in declaration order.
    #[serde(default)]
    pub allowed_input_types: Vec<String>,
    /// Whether values of this type can be compared.
    #[serde(default)]
    pub comparable: bool,
    /// Whether values of this type can be stored.
    #[serde(default)]
    pub storable: bool,
    #[serde(default)]
    pub draw_hint: DrawHint,
    /// Display color as unmultiplied RGBA in 0..=1.
    pub draw_color: [f32; 4],
    /// Value stored by unlinked sockets. `None` for link-only types.
    #[serde(default)]
    pub default_value: Option<SocketValue>,
    /// Range applied to numeric values.
    #[serde(default)]
    pub bounds: ValueBounds,
}

impl SocketType {
    /// Creates a link-only socket type with no stored value.
    pub fn new(id: impl Into<String>, label: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            data_type: data_type.into(),
            allowed_input_types: Vec::new(),
            comparable: false,
            storable: false,
            draw_hint: DrawHint::TextOnly,
            draw_color: [0.5, 0.5, 0.5, 1.0],
            default_value: None,
            bounds: ValueBounds::default(),
        }
    }

    /// Sets the accepted source data types. Duplicates are dropped, first
    /// occurrence wins.
    pub fn with_allowed_inputs<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_input_types.clear();
        for data_type in types {
            let data_type = data_type.into();
            if !self.allowed_input_types.contains(&data_type) {
                self.allowed_input_types.push(data_type);
            }
        }
        self
    }

    pub fn with_default_value(mut self, value: impl Into<SocketValue>) -> Self {
        self.default_value = Some(value.into());
        self.draw_hint = DrawHint::TextProperty;
        self
    }

    pub fn with_bounds(mut self, bounds: ValueBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_color(mut self, rgba: [f32; 4]) -> Self {
        self.draw_color = rgba;
        self
    }

    pub fn with_draw_hint(mut self, hint: DrawHint) -> Self {
        self.draw_hint = hint;
        self
    }

    pub fn comparable(mut self, comparable: bool) -> Self {
        self.comparable = comparable;
        self
    }

    pub fn storable(mut self, storable: bool) -> Self {
        self.storable = storable;
        self
    }

    /// The kind of value stored by sockets of this type.
    pub fn value_kind(&self) -> Option<ValueKind> {
        self.default_value.map(|v| v.kind())
    }

    /// Returns true if a socket of this type accepts links from `source`.
    ///
    /// Asymmetric: a type accepts its own data type plus whatever it lists
    /// in `allowed_input_types`, nothing more.
    pub fn accepts(&self, source: &SocketType) -> bool {
        self.accepts_data_type(&source.data_type)
    }

    pub fn accepts_data_type(&self, data_type: &str) -> bool {
        self.data_type == data_type || self.allowed_input_types.iter().any(|t| t == data_type)
    }

    /// Returns the color used to draw sockets and links of this type.
    pub fn color(&self) -> Color32 {
        let [r, g, b, a] = self.draw_color;
        Rgba::from_rgba_unmultiplied(r, g, b, a).into()
    }

    /// Checks the descriptor before registration.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::configuration("socket type has an empty identifier"));
        }
        if self.data_type.trim().is_empty() {
            return Err(Error::configuration(format!(
                "socket type '{}' has an empty data type",
                self.id
            )));
        }
        match self.value_kind() {
            Some(kind) => self.bounds.validate_for(kind),
            None => self.bounds.validate(),
        }
    }
}

/// Identifier of the built-in float socket type.
pub const FLOAT_SOCKET: &str = "FloatSocketType";
/// Identifier of the built-in integer socket type.
pub const INTEGER_SOCKET: &str = "IntegerSocketType";
/// Identifier of the built-in boolean socket type.
pub const BOOLEAN_SOCKET: &str = "BooleanSocketType";
/// Identifier of the built-in mesh socket type.
pub const MESH_SOCKET: &str = "MeshSocketType";
/// Identifier of the built-in texture socket type.
pub const TEXTURE_SOCKET: &str = "TextureSocketType";

/// Returns the stock socket types in registration order.
pub fn builtin_socket_types() -> Vec<SocketType> {
    vec![
        SocketType::new(FLOAT_SOCKET, "Float Socket", "Float")
            .with_allowed_inputs(["Float", "Integer", "Boolean"])
            .with_default_value(0.0)
            .with_color([1.0, 0.0, 1.0, 0.5])
            .comparable(true)
            .storable(true),
        SocketType::new(INTEGER_SOCKET, "Integer Socket", "Integer")
            .with_allowed_inputs(["Integer", "Boolean"])
            .with_default_value(0i64)
            .with_color([0.3, 0.4, 1.0, 0.5])
            .comparable(true)
            .storable(true),
        SocketType::new(BOOLEAN_SOCKET, "Boolean Socket", "Boolean")
            .with_default_value(false)
            .with_draw_hint(DrawHint::PropertyOnly)
            .with_color([0.7, 0.7, 0.4, 0.5])
            .comparable(true)
            .storable(true),
        SocketType::new(MESH_SOCKET, "Mesh Socket", "Mesh").with_color([0.1, 0.8, 0.6, 1.0]),
        SocketType::new(TEXTURE_SOCKET, "Texture Socket", "Texture")
            .with_color([0.9, 0.6, 0.2, 1.0])
            .storable(true),
    ]
}
