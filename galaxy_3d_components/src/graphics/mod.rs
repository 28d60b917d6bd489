//! Graphics-library seam
//!
//! The component layer only talks to materials through `GraphicsMaterial`.
//! This module also provides the reference objects the components build:
//! `MaterialObject` (seven material kinds), `Mesh`, `Texture`, `Color` and
//! the dynamic `PropValue`.

mod color;
mod value;
mod texture;
mod material_object;
mod mesh;

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use crate::error::{Error, Result};

pub use color::Color;
pub use value::PropValue;
pub use texture::Texture;
pub use material_object::MaterialObject;
pub use mesh::Mesh;

// ===== MATERIAL KINDS =====

/// Concrete material subtypes provided by the graphics library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    /// Unlit, flat color/texture
    Basic,
    /// Per-vertex diffuse lighting
    Lambert,
    /// Per-fragment Blinn-Phong with specular highlights
    Phong,
    /// Standard PBR extended with clearcoat, sheen, transmission, ...
    Physical,
    /// Point sprites
    Points,
    /// Metallic-roughness PBR
    Standard,
    /// Cel shading driven by a gradient map
    Toon,
}

impl MaterialKind {
    /// All kinds, in declaration order
    pub const ALL: [MaterialKind; 7] = [
        MaterialKind::Basic,
        MaterialKind::Lambert,
        MaterialKind::Phong,
        MaterialKind::Physical,
        MaterialKind::Points,
        MaterialKind::Standard,
        MaterialKind::Toon,
    ];

    /// Lowercase name ("basic", "lambert", ...)
    pub fn name(self) -> &'static str {
        match self {
            MaterialKind::Basic => "basic",
            MaterialKind::Lambert => "lambert",
            MaterialKind::Phong => "phong",
            MaterialKind::Physical => "physical",
            MaterialKind::Points => "points",
            MaterialKind::Standard => "standard",
            MaterialKind::Toon => "toon",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ===== MATERIAL TRAIT =====

/// Field-level contract of a graphics-library material
///
/// Fields are addressed by snake_case name ("color", "map", "roughness").
pub trait GraphicsMaterial: Send {
    /// Concrete subtype
    fn kind(&self) -> MaterialKind;

    /// Current value of a field
    fn field(&self, name: &str) -> Option<&PropValue>;

    /// Mutable access to a field (used for in-place color updates)
    fn field_mut(&mut self, name: &str) -> Option<&mut PropValue>;

    /// Replace a field value
    ///
    /// Fails for unknown fields and incompatible value types.
    fn set_field(&mut self, name: &str, value: PropValue) -> Result<()>;

    /// Names of all fields, in declaration order
    fn field_names(&self) -> Vec<&str>;

    /// The base color field, when the material has one
    fn color_mut(&mut self) -> Option<&mut Color> {
        match self.field_mut("color") {
            Some(PropValue::Color(color)) => Some(color),
            _ => None,
        }
    }

    /// Request a re-upload to the rendering backend
    ///
    /// `true` raises the flag and bumps `version()`. `false` is a no-op:
    /// only the backend clears the flag, via `acknowledge_upload`.
    fn set_needs_update(&mut self, value: bool);

    /// Whether a re-upload is pending
    fn needs_update(&self) -> bool;

    /// Number of re-upload requests so far
    fn version(&self) -> u64;

    /// Called by the backend once the material has been uploaded
    fn acknowledge_upload(&mut self);

    /// Release backend resources
    fn dispose(&mut self);

    fn is_disposed(&self) -> bool;
}

/// Material shared between its owning component and the mesh it is bound to
pub type SharedMaterial = Arc<Mutex<dyn GraphicsMaterial>>;

/// Wrap a material for sharing
pub fn share_material<M: GraphicsMaterial + 'static>(material: M) -> SharedMaterial {
    Arc::new(Mutex::new(material))
}

/// Lock a shared material, mapping lock poisoning to `Error::BackendError`
pub fn lock_material(material: &SharedMaterial) -> Result<MutexGuard<'_, dyn GraphicsMaterial + 'static>> {
    material
        .lock()
        .map_err(|_| Error::BackendError("Material lock poisoned".to_string()))
}
