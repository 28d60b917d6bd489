//! Declarative components
//!
//! Material and texture components, the material variant table and the
//! property binder that keeps material fields in sync with component inputs.

mod property_bag;
mod mesh_handle;
mod variant;
mod material;
mod texture;
pub mod binding;

pub use property_bag::PropertyBag;
pub use mesh_handle::MeshHandle;
pub use variant::{MaterialFactory, MaterialVariant, VariantTable};
pub use material::{
    MaterialComponent, MaterialComponentDesc,
    DEFAULT_COLOR, DEFAULT_TEXTURE_FIELD,
};
pub use texture::{TextureComponent, TextureComponentDesc};
