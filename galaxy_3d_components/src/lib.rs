/*!
# Galaxy 3D Components

Declarative scene components for the Galaxy3D graphics layer.

This crate lets an application describe a scene graph (meshes, materials,
textures) as a tree of components. Each component is bound one-to-one to an
object of the underlying graphics library: components construct their
object when mounted, push input changes onto it, and release it when
unmounted.

## Architecture

- **graphics**: Graphics-library seam (`GraphicsMaterial` trait) plus the
  reference objects (`MaterialObject`, `Mesh`, `Texture`, `Color`, `PropValue`)
- **component**: Material and texture components, the variant table and the
  property binder
- **scene**: `ComponentTree`, the declarative tree with ancestor lookup and
  ordered unmount
*/

// Internal modules
mod error;
mod diagnostics;
pub mod log;
pub mod graphics;
pub mod component;
pub mod scene;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging hub
    pub use crate::diagnostics::Diagnostics;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Graphics-library objects
    pub mod graphics {
        pub use crate::graphics::*;
    }

    // Declarative components
    pub mod component {
        pub use crate::component::*;
    }

    // Component tree
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
