/// Capability a material component needs from its parent mesh.

use crate::graphics::{Mesh, SharedMaterial};

/// Attach point for a constructed material
///
/// The handle does not own the material's lifetime: the material
/// component that built it disposes it on unmount.
pub trait MeshHandle {
    fn set_material(&mut self, material: SharedMaterial);
}

impl MeshHandle for Mesh {
    fn set_material(&mut self, material: SharedMaterial) {
        Mesh::set_material(self, material);
    }
}
