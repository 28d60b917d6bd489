/// Graphics-library mesh object.
///
/// Geometry is out of scope here: a Mesh only carries the material it
/// renders with. The material reference is shared, not owned; the
/// component that created the material is responsible for disposing it.

use super::SharedMaterial;

/// A renderable scene object
pub struct Mesh {
    name: String,
    material: Option<SharedMaterial>,
    material_assignments: u32,
}

impl Mesh {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            material: None,
            material_assignments: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bind the material used to render this mesh
    pub fn set_material(&mut self, material: SharedMaterial) {
        self.material = Some(material);
        self.material_assignments += 1;
    }

    /// Currently bound material
    pub fn material(&self) -> Option<&SharedMaterial> {
        self.material.as_ref()
    }

    /// How many times `set_material` was called
    pub fn material_assignments(&self) -> u32 {
        self.material_assignments
    }
}
