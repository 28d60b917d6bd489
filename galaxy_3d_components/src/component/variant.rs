/// Material variants: name → construction function.
///
/// A material component does not know which material it builds; it calls
/// the factory of its variant with the merged construction options. The
/// seven builtin variants map one-to-one onto `MaterialKind`. Custom
/// variants may wrap any `GraphicsMaterial` implementation.

use std::fmt;
use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::graphics::{share_material, MaterialKind, MaterialObject, SharedMaterial};
use super::property_bag::PropertyBag;

/// Construction function: merged options → new material
pub type MaterialFactory = Arc<dyn Fn(&PropertyBag) -> Result<SharedMaterial> + Send + Sync>;

// ===== MATERIAL VARIANT =====

/// A named material construction strategy
#[derive(Clone)]
pub struct MaterialVariant {
    name: String,
    factory: MaterialFactory,
}

impl MaterialVariant {
    /// Create a variant from a construction function
    pub fn new<F>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&PropertyBag) -> Result<SharedMaterial> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            factory: Arc::new(factory),
        }
    }

    /// Variant building a `MaterialObject` of the given kind
    pub fn builtin(kind: MaterialKind) -> Self {
        Self::new(kind.name(), move |options: &PropertyBag| {
            let material = MaterialObject::from_options(kind, options.iter())?;
            Ok(share_material(material))
        })
    }

    /// Builtin variant by name ("basic", "lambert", ...)
    pub fn by_name(name: &str) -> Result<Self> {
        MaterialKind::from_name(name)
            .map(Self::builtin)
            .ok_or_else(|| Error::UnknownVariant(name.to_string()))
    }

    pub fn basic() -> Self {
        Self::builtin(MaterialKind::Basic)
    }

    pub fn lambert() -> Self {
        Self::builtin(MaterialKind::Lambert)
    }

    pub fn phong() -> Self {
        Self::builtin(MaterialKind::Phong)
    }

    pub fn physical() -> Self {
        Self::builtin(MaterialKind::Physical)
    }

    pub fn points() -> Self {
        Self::builtin(MaterialKind::Points)
    }

    pub fn standard() -> Self {
        Self::builtin(MaterialKind::Standard)
    }

    pub fn toon() -> Self {
        Self::builtin(MaterialKind::Toon)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the construction function
    pub fn create(&self, options: &PropertyBag) -> Result<SharedMaterial> {
        (self.factory)(options)
    }
}

impl fmt::Debug for MaterialVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaterialVariant").field("name", &self.name).finish_non_exhaustive()
    }
}

// ===== VARIANT TABLE =====

/// Registry of material variants addressable by name
#[derive(Debug, Clone, Default)]
pub struct VariantTable {
    variants: FxHashMap<String, MaterialVariant>,
}

impl VariantTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding the seven builtin variants
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        for kind in MaterialKind::ALL {
            table.register(MaterialVariant::builtin(kind));
        }
        table
    }

    /// Add a variant, returning the one it replaced
    pub fn register(&mut self, variant: MaterialVariant) -> Option<MaterialVariant> {
        self.variants.insert(variant.name.clone(), variant)
    }

    pub fn get(&self, name: &str) -> Option<&MaterialVariant> {
        self.variants.get(name)
    }

    /// Clone of the named variant, or `Error::UnknownVariant`
    pub fn resolve(&self, name: &str) -> Result<MaterialVariant> {
        self.get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownVariant(name.to_string()))
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.variants.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "variant_tests.rs"]
mod tests;
