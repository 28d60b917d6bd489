/// Graphics-library texture object.
///
/// Image decoding is out of scope: a texture is created already decoded
/// and is shared between material slots through `Arc`. Disposal releases
/// the backend copy; the Rust value stays alive while referenced.

use std::sync::atomic::{AtomicU32, Ordering};

/// A decoded texture that can be bound to material slots
#[derive(Debug)]
pub struct Texture {
    name: String,
    width: u32,
    height: u32,
    dispose_count: AtomicU32,
}

impl Texture {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            dispose_count: AtomicU32::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Release backend resources held for this texture
    pub fn dispose(&self) {
        self.dispose_count.fetch_add(1, Ordering::Relaxed);
        crate::scene_debug!("galaxy3d::Texture", "Disposed texture '{}'", self.name);
    }

    pub fn is_disposed(&self) -> bool {
        self.dispose_count() > 0
    }

    /// Number of `dispose` calls received
    pub fn dispose_count(&self) -> u32 {
        self.dispose_count.load(Ordering::Relaxed)
    }
}
