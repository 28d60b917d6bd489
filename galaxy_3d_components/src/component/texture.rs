/// Texture component: binds a texture to a field of its ancestor material.
///
/// On mount the texture is assigned through `MaterialComponent::set_texture`;
/// on unmount the field is cleared again and the texture is disposed.

use std::sync::Arc;
use crate::error::Result;
use crate::graphics::Texture;
use super::material::{MaterialComponent, DEFAULT_TEXTURE_FIELD};

/// Texture component inputs
#[derive(Debug, Clone)]
pub struct TextureComponentDesc {
    pub texture: Arc<Texture>,
    /// Target material field
    pub field: String,
}

impl TextureComponentDesc {
    /// Bind to the default "map" field
    pub fn new(texture: Arc<Texture>) -> Self {
        Self {
            texture,
            field: DEFAULT_TEXTURE_FIELD.to_string(),
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }
}

/// Mounted texture component
pub struct TextureComponent {
    texture: Arc<Texture>,
    field: String,
    bound: bool,
    unmounted: bool,
}

impl TextureComponent {
    /// Assign the texture to `material`
    ///
    /// Without a material the diagnostic "Missing parent Material" is
    /// logged and the component stays unbound. If the material rejects the
    /// texture the error is returned and the texture is disposed.
    pub fn mount(desc: TextureComponentDesc, material: Option<&MaterialComponent>) -> Result<Self> {
        let bound = match material {
            Some(material) => {
                if let Err(err) = material.set_texture(Some(desc.texture.clone()), &desc.field) {
                    desc.texture.dispose();
                    return Err(err);
                }
                material.material().is_some()
            }
            None => {
                crate::scene_error!("galaxy3d::TextureComponent", "Missing parent Material");
                false
            }
        };

        Ok(Self {
            texture: desc.texture,
            field: desc.field,
            bound,
            unmounted: false,
        })
    }

    pub fn texture(&self) -> &Arc<Texture> {
        &self.texture
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Whether the texture was assigned to a material at mount time
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Clear the material field (if bound) and dispose the texture
    ///
    /// Returns Ok(false) if the component was already unmounted. The
    /// texture is disposed even when clearing the field fails.
    pub fn unmount(&mut self, material: Option<&MaterialComponent>) -> Result<bool> {
        if self.unmounted {
            return Ok(false);
        }
        self.unmounted = true;

        let cleared = match (self.bound, material) {
            (true, Some(material)) => material.set_texture(None, &self.field),
            _ => Ok(()),
        };
        self.texture.dispose();
        cleared.map(|_| true)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
