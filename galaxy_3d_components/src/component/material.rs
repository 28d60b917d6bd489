/// Material component: declarative owner of one graphics-library material.
///
/// Lifecycle:
/// - mount: build the material from the variant factory with the merged
///   construction options, then attach it to the parent mesh
/// - update: `set_color` mirrors the color input in place, `set_props`
///   reconciles the property bag onto the material fields
/// - unmount: dispose the material once (also run on drop)
///
/// Descendant components assign textures through `set_texture`.

use std::sync::Arc;
use crate::error::Result;
use crate::graphics::{lock_material, PropValue, SharedMaterial, Texture};
use super::binding::{apply_prop, reconcile};
use super::mesh_handle::MeshHandle;
use super::property_bag::PropertyBag;
use super::variant::MaterialVariant;

/// Default `color` input (opaque white)
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Field targeted by `set_texture` when none is given
pub const DEFAULT_TEXTURE_FIELD: &str = "map";

// ===== DESCRIPTOR =====

/// Material component inputs
#[derive(Debug, Clone)]
pub struct MaterialComponentDesc {
    /// Construction strategy
    pub variant: MaterialVariant,
    /// Base color (any string accepted by `Color::parse`)
    pub color: String,
    /// Free-form fields, applied at construction and kept bound afterwards
    pub props: PropertyBag,
}

impl MaterialComponentDesc {
    /// Inputs with default color and empty props
    pub fn new(variant: MaterialVariant) -> Self {
        Self {
            variant,
            color: DEFAULT_COLOR.to_string(),
            props: PropertyBag::new(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_props(mut self, props: PropertyBag) -> Self {
        self.props = props;
        self
    }

    /// Add a single entry to `props`
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key, value);
        self
    }

    /// Declared inputs overlaid with `props` (props win on name clashes)
    pub fn construction_options(&self) -> PropertyBag {
        let declared = PropertyBag::new().with("color", self.color.as_str());
        self.props.merged_over(&declared)
    }
}

// ===== COMPONENT =====

/// Mounted material component
pub struct MaterialComponent {
    variant_name: String,
    color: String,
    props: PropertyBag,
    material: Option<SharedMaterial>,
    unmounted: bool,
}

impl MaterialComponent {
    /// Build the material and attach it to `mesh`
    ///
    /// Construction errors from the variant factory are returned unchanged;
    /// nothing is attached in that case.
    pub fn create(desc: MaterialComponentDesc, mesh: &mut dyn MeshHandle) -> Result<Self> {
        let material = desc.variant.create(&desc.construction_options())?;
        mesh.set_material(material.clone());

        crate::scene_debug!("galaxy3d::MaterialComponent",
            "Created '{}' material", desc.variant.name());

        Ok(Self {
            variant_name: desc.variant.name().to_string(),
            color: desc.color,
            props: desc.props,
            material: Some(material),
            unmounted: false,
        })
    }

    /// Mount against an optional parent mesh
    ///
    /// Without a mesh the diagnostic "Missing parent Mesh" is logged and an
    /// inert component is returned: no material is built or attached.
    pub fn mount(desc: MaterialComponentDesc, mesh: Option<&mut dyn MeshHandle>) -> Result<Self> {
        match mesh {
            Some(mesh) => Self::create(desc, mesh),
            None => {
                crate::scene_error!("galaxy3d::MaterialComponent", "Missing parent Mesh");
                Ok(Self::detached(desc))
            }
        }
    }

    /// Inert component holding inputs only
    pub fn detached(desc: MaterialComponentDesc) -> Self {
        Self {
            variant_name: desc.variant.name().to_string(),
            color: desc.color,
            props: desc.props,
            material: None,
            unmounted: false,
        }
    }

    // ===== ACCESSORS =====

    /// The constructed material (None for inert components)
    pub fn material(&self) -> Option<&SharedMaterial> {
        self.material.as_ref()
    }

    pub fn variant_name(&self) -> &str {
        &self.variant_name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn props(&self) -> &PropertyBag {
        &self.props
    }

    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    // ===== INPUT UPDATES =====

    /// Change the color input and mirror it onto the material color in place
    ///
    /// The input is stored only once the material accepted it, so a parse
    /// failure leaves both `color()` and the material unchanged.
    pub fn set_color(&mut self, color: &str) -> Result<()> {
        let Some(material) = &self.material else {
            self.color = color.to_string();
            return Ok(());
        };

        let mut material = lock_material(material)?;
        let kind = material.kind();
        match material.color_mut() {
            Some(current) => current.set(&PropValue::Str(color.to_string()))?,
            None => {
                crate::scene_warn!("galaxy3d::MaterialComponent",
                    "{} material has no color field, color input ignored", kind);
            }
        }
        self.color = color.to_string();
        Ok(())
    }

    /// Replace the props input and apply the changed keys
    ///
    /// Returns the keys that were applied to the material. On error the
    /// previous props stay recorded, so sending the bag again re-applies
    /// every key that differs from them.
    pub fn set_props(&mut self, props: PropertyBag) -> Result<Vec<String>> {
        let applied = match &self.material {
            Some(material) => {
                let mut material = lock_material(material)?;
                reconcile(&mut *material, &self.props, &props)?
            }
            None => Vec::new(),
        };
        self.props = props;
        Ok(applied)
    }

    /// Assign (or clear, with None) a texture field and request a re-upload
    pub fn set_texture(&self, texture: Option<Arc<Texture>>, field: &str) -> Result<()> {
        let Some(material) = &self.material else {
            crate::scene_warn!("galaxy3d::MaterialComponent",
                "'{}' material was never created, texture for '{}' ignored", self.variant_name, field);
            return Ok(());
        };

        let mut material = lock_material(material)?;
        apply_prop(&mut *material, field, PropValue::Texture(texture), true)
    }

    /// `set_texture` on the default "map" field
    pub fn set_map(&self, texture: Option<Arc<Texture>>) -> Result<()> {
        self.set_texture(texture, DEFAULT_TEXTURE_FIELD)
    }

    // ===== TEARDOWN =====

    /// Dispose the material
    ///
    /// Returns false if the component was already unmounted.
    pub fn unmount(&mut self) -> bool {
        if self.unmounted {
            return false;
        }
        self.unmounted = true;

        if let Some(material) = &self.material {
            match lock_material(material) {
                Ok(mut material) => material.dispose(),
                Err(err) => crate::scene_error!("galaxy3d::MaterialComponent",
                    "Cannot dispose '{}' material: {}", self.variant_name, err),
            }
        }
        true
    }
}

impl Drop for MaterialComponent {
    fn drop(&mut self) {
        self.unmount();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "material_tests.rs"]
mod tests;
