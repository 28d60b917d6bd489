//! Property binder: pushes component inputs onto material fields
//!
//! - `apply_prop`: the per-field rule (colors in place, everything else replaced)
//! - `reconcile`: diff two property bags and apply the changed keys

use crate::error::Result;
use crate::graphics::{GraphicsMaterial, PropValue};
use super::property_bag::PropertyBag;

/// Apply one value to a material field
///
/// If the field currently holds a color, the color is updated in place
/// from `value` (color, hex int or color string). Otherwise the field is
/// replaced. When `needs_update` is true the material is flagged for
/// re-upload; false leaves any pending flag untouched.
pub fn apply_prop(
    material: &mut dyn GraphicsMaterial,
    key: &str,
    value: PropValue,
    needs_update: bool,
) -> Result<()> {
    match material.field_mut(key) {
        Some(PropValue::Color(color)) => color.set(&value)?,
        _ => material.set_field(key, value)?,
    }
    material.set_needs_update(needs_update);
    Ok(())
}

/// Apply the difference between two property bags
///
/// Keys that are new in `next` or whose value changed are applied in
/// `next` order without requesting a re-upload. Keys dropped from `next`
/// are left at their last applied value. Returns the applied keys.
///
/// Stops at the first failing key; earlier keys stay applied.
pub fn reconcile(
    material: &mut dyn GraphicsMaterial,
    previous: &PropertyBag,
    next: &PropertyBag,
) -> Result<Vec<String>> {
    let mut applied = Vec::new();
    for (key, value) in next.changes_from(previous) {
        apply_prop(material, key, value.clone(), false)?;
        applied.push(key.to_string());
    }

    for key in next.removed_from(previous) {
        crate::scene_trace!("galaxy3d::binding",
            "'{}' removed from props, {} material keeps its last value", key, material.kind());
    }

    Ok(applied)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "binding_tests.rs"]
mod tests;
