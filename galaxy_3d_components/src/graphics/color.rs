/// RGB color value used by material color fields.
///
/// Components are stored as floats in [0, 1]. Color fields are the only
/// fields the property binder updates in place; see `Color::set`.

use glam::Vec3;
use crate::error::{Error, Result};
use super::value::PropValue;

/// RGB color with float components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// CSS-style color keywords accepted by `Color::parse`
const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("white", 0xffffff),
    ("red", 0xff0000),
    ("lime", 0x00ff00),
    ("green", 0x008000),
    ("blue", 0x0000ff),
    ("yellow", 0xffff00),
    ("cyan", 0x00ffff),
    ("magenta", 0xff00ff),
    ("orange", 0xffa500),
    ("gray", 0x808080),
    ("grey", 0x808080),
];

impl Color {
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed 0xRRGGBB value
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Pack into 0xRRGGBB (components are clamped)
    pub fn to_hex(&self) -> u32 {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)` or a color keyword
    pub fn parse(style: &str) -> Result<Self> {
        let style = style.trim().to_ascii_lowercase();

        if let Some(hex) = style.strip_prefix('#') {
            return Self::parse_hex_digits(hex)
                .ok_or_else(|| Error::InvalidColor(format!("'{}' is not a hex color", style)));
        }

        if let Some(body) = style.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
            return Self::parse_rgb_function(body)
                .ok_or_else(|| Error::InvalidColor(format!("'{}' is not a valid rgb() color", style)));
        }

        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == style)
            .map(|(_, hex)| Self::from_hex(*hex))
            .ok_or_else(|| Error::InvalidColor(format!("unknown color '{}'", style)))
    }

    /// Overwrite the components from a property value
    ///
    /// Accepts another color, a packed hex integer or a color string.
    pub fn set(&mut self, value: &PropValue) -> Result<()> {
        *self = match value {
            PropValue::Color(color) => *color,
            PropValue::Int(hex) if *hex >= 0 => Self::from_hex(*hex as u32),
            PropValue::Str(style) => Self::parse(style)?,
            PropValue::Vec3(v) => Self::from(*v),
            other => {
                return Err(Error::InvalidColor(format!(
                    "cannot set a color from {}",
                    other.type_name()
                )))
            }
        };
        Ok(())
    }

    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    fn parse_hex_digits(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let value = u32::from_str_radix(hex, 16).ok()?;
                let expand = |nibble: u32| nibble * 17;
                Some(Self::from_hex(
                    (expand((value >> 8) & 0xf) << 16)
                        | (expand((value >> 4) & 0xf) << 8)
                        | expand(value & 0xf),
                ))
            }
            6 => u32::from_str_radix(hex, 16).ok().map(Self::from_hex),
            _ => None,
        }
    }

    fn parse_rgb_function(body: &str) -> Option<Self> {
        let channels: Vec<f32> = body
            .split(',')
            .map(|part| {
                let part = part.trim();
                match part.strip_suffix('%') {
                    Some(percent) => percent.trim().parse::<f32>().ok().map(|p| p / 100.0),
                    None => part.parse::<f32>().ok().map(|v| v / 255.0),
                }
            })
            .collect::<Option<Vec<f32>>>()?;

        match channels.as_slice() {
            [r, g, b] => Some(Self::new(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))),
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<Vec3> for Color {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
