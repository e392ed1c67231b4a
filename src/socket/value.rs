//! Values stored in sockets and the bounds that constrain them.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lower bound used by numeric sockets that declare no explicit range.
pub const DEFAULT_MIN_VALUE: f64 = -1e10;

/// Upper bound used by numeric sockets that declare no explicit range.
pub const DEFAULT_MAX_VALUE: f64 = f64::MAX;

/// The kind of value a socket stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Float,
    Integer,
    Boolean,
}

impl ValueKind {
    /// Returns true for kinds that are clamped to bounds.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueKind::Float | ValueKind::Integer)
    }
}

/// A value held by a socket.
///
/// Serialized with an explicit tag so stored configurations keep their kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum SocketValue {
    Float(f64),
    Integer(i64),
    Boolean(bool),
}

impl SocketValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            SocketValue::Float(_) => ValueKind::Float,
            SocketValue::Integer(_) => ValueKind::Integer,
            SocketValue::Boolean(_) => ValueKind::Boolean,
        }
    }

    /// Get the value as f64.
    pub fn as_f64(&self) -> f64 {
        match self {
            SocketValue::Float(v) => *v,
            SocketValue::Integer(v) => *v as f64,
            SocketValue::Boolean(v) => {
                if *v {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Converts this value to another kind.
    ///
    /// Floats become integers by truncation toward zero (saturating at the
    /// i64 range, NaN becomes 0); any non-zero number becomes `true`.
    pub fn convert_to(self, kind: ValueKind) -> SocketValue {
        match (self, kind) {
            (value, kind) if value.kind() == kind => value,
            (value, ValueKind::Float) => SocketValue::Float(value.as_f64()),
            (SocketValue::Float(v), ValueKind::Integer) => SocketValue::Integer(v as i64),
            (SocketValue::Boolean(v), ValueKind::Integer) => SocketValue::Integer(i64::from(v)),
            (value, ValueKind::Boolean) => SocketValue::Boolean(value.as_f64() != 0.0),
            (value, _) => value,
        }
    }

    /// Clamps numeric values into `bounds`; booleans pass through unchanged.
    pub fn clamped(self, bounds: &ValueBounds) -> SocketValue {
        match self {
            SocketValue::Float(v) => SocketValue::Float(bounds.clamp(v)),
            SocketValue::Integer(v) => SocketValue::Integer(bounds.clamp_integer(v)),
            SocketValue::Boolean(v) => SocketValue::Boolean(v),
        }
    }
}

impl From<f64> for SocketValue {
    fn from(value: f64) -> Self {
        SocketValue::Float(value)
    }
}

impl From<f32> for SocketValue {
    fn from(value: f32) -> Self {
        SocketValue::Float(f64::from(value))
    }
}

impl From<i64> for SocketValue {
    fn from(value: i64) -> Self {
        SocketValue::Integer(value)
    }
}

impl From<i32> for SocketValue {
    fn from(value: i32) -> Self {
        SocketValue::Integer(i64::from(value))
    }
}

impl From<bool> for SocketValue {
    fn from(value: bool) -> Self {
        SocketValue::Boolean(value)
    }
}

/// Inclusive range for numeric socket values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueBounds {
    pub min: f64,
    pub max: f64,
}

impl ValueBounds {
    /// Creates a range, rejecting NaN limits and inverted ranges.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Checks the range is usable for clamping.
    ///
    /// Both limits must be finite so they survive a JSON round trip.
    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::configuration(format!(
                "socket bounds must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(Error::configuration(format!(
                "socket bounds are inverted: min {} > max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Checks the range can hold values of `kind`.
    ///
    /// Integer sockets need at least one integer inside the range.
    pub fn validate_for(&self, kind: ValueKind) -> Result<()> {
        self.validate()?;
        if kind == ValueKind::Integer && !self.contains_integer() {
            return Err(Error::configuration(format!(
                "integer socket bounds [{}, {}] contain no integer",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Returns true if at least one integer lies inside the range.
    pub fn contains_integer(&self) -> bool {
        self.min.ceil() <= self.max.floor()
    }

    /// Clamps a float into this range. NaN maps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Clamps an integer into the integers contained in this range.
    ///
    /// Ranges without an integer are rejected by
    /// [`validate_for`](Self::validate_for); for those the result is
    /// `ceil(min)`.
    pub fn clamp_integer(&self, value: i64) -> i64 {
        let lo = self.min.ceil() as i64;
        let hi = self.max.floor() as i64;
        value.max(lo).min(hi.max(lo))
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for ValueBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_VALUE,
            max: DEFAULT_MAX_VALUE,
        }
    }
}
