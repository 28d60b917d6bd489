/// Dynamic field values for material objects and property bags.

use std::sync::Arc;
use glam::{Vec2, Vec3};
use super::color::Color;
use super::texture::Texture;

/// A value stored in a material field or a property bag entry
///
/// Textures compare by identity (same `Arc`), everything else by value.
#[derive(Debug, Clone)]
pub enum PropValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Str(String),
    Color(Color),
    Vec2(Vec2),
    Vec3(Vec3),
    /// Texture slot (None = empty slot)
    Texture(Option<Arc<Texture>>),
}

impl PropValue {
    /// Short type name used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            PropValue::Bool(_) => "bool",
            PropValue::Int(_) => "int",
            PropValue::Float(_) => "float",
            PropValue::Str(_) => "string",
            PropValue::Color(_) => "color",
            PropValue::Vec2(_) => "vec2",
            PropValue::Vec3(_) => "vec3",
            PropValue::Texture(_) => "texture",
        }
    }

    /// Convert `self` so it can be stored in a field currently holding `current`
    ///
    /// Returns None when the types are incompatible. Ints widen to floats;
    /// every other conversion requires an exact type match.
    pub fn coerce_to(self, current: &PropValue) -> Option<PropValue> {
        match (current, self) {
            (PropValue::Float(_), PropValue::Int(i)) => Some(PropValue::Float(i as f32)),
            (current, value) if std::mem::discriminant(current) == std::mem::discriminant(&value) => {
                Some(value)
            }
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            PropValue::Float(v) => Some(*v),
            PropValue::Int(v) => Some(*v as f32),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            PropValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<&Color> {
        match self {
            PropValue::Color(c) => Some(c),
            _ => None,
        }
    }

    /// Texture in a texture slot (None for empty slots and non-texture values)
    pub fn as_texture(&self) -> Option<&Arc<Texture>> {
        match self {
            PropValue::Texture(Some(t)) => Some(t),
            _ => None,
        }
    }
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PropValue::Bool(a), PropValue::Bool(b)) => a == b,
            (PropValue::Int(a), PropValue::Int(b)) => a == b,
            (PropValue::Float(a), PropValue::Float(b)) => a == b,
            (PropValue::Str(a), PropValue::Str(b)) => a == b,
            (PropValue::Color(a), PropValue::Color(b)) => a == b,
            (PropValue::Vec2(a), PropValue::Vec2(b)) => a == b,
            (PropValue::Vec3(a), PropValue::Vec3(b)) => a == b,
            (PropValue::Texture(a), PropValue::Texture(b)) => match (a, b) {
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            },
            _ => false,
        }
    }
}

// ===== CONVERSIONS =====

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        PropValue::Bool(v)
    }
}

impl From<i32> for PropValue {
    fn from(v: i32) -> Self {
        PropValue::Int(v)
    }
}

impl From<f32> for PropValue {
    fn from(v: f32) -> Self {
        PropValue::Float(v)
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        PropValue::Str(v.to_string())
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        PropValue::Str(v)
    }
}

impl From<Color> for PropValue {
    fn from(v: Color) -> Self {
        PropValue::Color(v)
    }
}

impl From<Vec2> for PropValue {
    fn from(v: Vec2) -> Self {
        PropValue::Vec2(v)
    }
}

impl From<Vec3> for PropValue {
    fn from(v: Vec3) -> Self {
        PropValue::Vec3(v)
    }
}

impl From<Arc<Texture>> for PropValue {
    fn from(v: Arc<Texture>) -> Self {
        PropValue::Texture(Some(v))
    }
}

impl From<Option<Arc<Texture>>> for PropValue {
    fn from(v: Option<Arc<Texture>>) -> Self {
        PropValue::Texture(v)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
