/// Tests for MaterialComponent
///
/// These tests use a recording mesh handle and a counting mock material
/// (behind a custom variant) to observe construction, attachment,
/// updates and disposal.

use super::*;
use crate::error::Error;
use crate::graphics::{
    share_material, Color, GraphicsMaterial, MaterialKind, MaterialObject, Mesh,
};
use std::sync::atomic::{AtomicU32, Ordering};

// ============================================================================
// Helper Types
// ============================================================================

/// Mesh handle recording every attached material
#[derive(Default)]
struct RecordingMesh {
    attached: Vec<SharedMaterial>,
}

impl MeshHandle for RecordingMesh {
    fn set_material(&mut self, material: SharedMaterial) {
        self.attached.push(material);
    }
}

/// MaterialObject wrapper counting dispose calls
struct MockMaterial {
    inner: MaterialObject,
    disposals: Arc<AtomicU32>,
}

impl GraphicsMaterial for MockMaterial {
    fn kind(&self) -> MaterialKind { self.inner.kind() }
    fn field(&self, name: &str) -> Option<&PropValue> { self.inner.field(name) }
    fn field_mut(&mut self, name: &str) -> Option<&mut PropValue> { self.inner.field_mut(name) }
    fn set_field(&mut self, name: &str, value: PropValue) -> Result<()> { self.inner.set_field(name, value) }
    fn field_names(&self) -> Vec<&str> { self.inner.field_names() }
    fn set_needs_update(&mut self, value: bool) { self.inner.set_needs_update(value) }
    fn needs_update(&self) -> bool { self.inner.needs_update() }
    fn version(&self) -> u64 { self.inner.version() }
    fn acknowledge_upload(&mut self) { self.inner.acknowledge_upload() }
    fn dispose(&mut self) {
        self.disposals.fetch_add(1, Ordering::SeqCst);
        self.inner.dispose();
    }
    fn is_disposed(&self) -> bool { self.inner.is_disposed() }
}

struct Counters {
    creations: Arc<AtomicU32>,
    disposals: Arc<AtomicU32>,
}

/// Custom "mock" variant building standard materials and counting calls
fn counting_variant() -> (MaterialVariant, Counters) {
    let creations = Arc::new(AtomicU32::new(0));
    let disposals = Arc::new(AtomicU32::new(0));
    let counters = Counters { creations: creations.clone(), disposals: disposals.clone() };

    let variant = MaterialVariant::new("mock", move |options: &PropertyBag| {
        creations.fetch_add(1, Ordering::SeqCst);
        let inner = MaterialObject::from_options(MaterialKind::Standard, options.iter())?;
        Ok(share_material(MockMaterial { inner, disposals: disposals.clone() }))
    });
    (variant, counters)
}

fn field(material: &SharedMaterial, name: &str) -> PropValue {
    material.lock().unwrap().field(name).unwrap().clone()
}

// ============================================================================
// Tests: Construction
// ============================================================================

#[test]
fn test_each_builtin_variant_builds_its_kind() {
    for kind in MaterialKind::ALL {
        let mut mesh = RecordingMesh::default();
        let component = MaterialComponent::create(
            MaterialComponentDesc::new(MaterialVariant::builtin(kind)),
            &mut mesh,
        ).unwrap();

        assert_eq!(mesh.attached.len(), 1);
        let material = component.material().unwrap();
        assert!(Arc::ptr_eq(material, &mesh.attached[0]));
        assert_eq!(material.lock().unwrap().kind(), kind);
        assert_eq!(component.variant_name(), kind.name());
    }
}

#[test]
fn test_create_attaches_to_real_mesh() {
    let mut mesh = Mesh::new("cube");
    let component = MaterialComponent::create(
        MaterialComponentDesc::new(MaterialVariant::phong()),
        &mut mesh,
    ).unwrap();

    assert_eq!(mesh.material_assignments(), 1);
    assert!(Arc::ptr_eq(mesh.material().unwrap(), component.material().unwrap()));
}

#[test]
fn test_default_inputs() {
    let desc = MaterialComponentDesc::new(MaterialVariant::basic());
    assert_eq!(desc.color, DEFAULT_COLOR);
    assert!(desc.props.is_empty());

    let mut mesh = RecordingMesh::default();
    let component = MaterialComponent::create(desc, &mut mesh).unwrap();
    assert_eq!(field(component.material().unwrap(), "color"), PropValue::Color(Color::WHITE));
}

#[test]
fn test_color_input_is_applied_at_construction() {
    let mut mesh = RecordingMesh::default();
    let component = MaterialComponent::create(
        MaterialComponentDesc::new(MaterialVariant::lambert()).with_color("#336699"),
        &mut mesh,
    ).unwrap();

    assert_eq!(
        field(component.material().unwrap(), "color"),
        PropValue::Color(Color::from_hex(0x336699))
    );
}

#[test]
fn test_props_override_declared_inputs() {
    let desc = MaterialComponentDesc::new(MaterialVariant::standard())
        .with_color("#ffffff")
        .with_prop("color", "#ff0000")
        .with_prop("roughness", 0.3f32);

    let options = desc.construction_options();
    assert_eq!(options.get("color"), Some(&PropValue::from("#ff0000")));
    assert_eq!(options.get("roughness"), Some(&PropValue::Float(0.3)));

    let mut mesh = RecordingMesh::default();
    let component = MaterialComponent::create(desc, &mut mesh).unwrap();
    let material = component.material().unwrap();
    assert_eq!(field(material, "color"), PropValue::Color(Color::from_hex(0xff0000)));
    assert_eq!(field(material, "roughness"), PropValue::Float(0.3));
    // The color input itself is unchanged
    assert_eq!(component.color(), "#ffffff");
}

#[test]
fn test_factory_error_propagates_and_nothing_is_attached() {
    let mut mesh = RecordingMesh::default();
    let result = MaterialComponent::create(
        MaterialComponentDesc::new(MaterialVariant::toon()).with_color("definitely-not-a-color"),
        &mut mesh,
    );

    assert!(matches!(result, Err(Error::InvalidColor(_))));
    assert!(mesh.attached.is_empty());
}

#[test]
fn test_mount_without_mesh_builds_nothing() {
    let (variant, counters) = counting_variant();

    let component = MaterialComponent::mount(MaterialComponentDesc::new(variant), None).unwrap();

    assert!(component.material().is_none());
    assert_eq!(counters.creations.load(Ordering::SeqCst), 0);
}

#[test]
fn test_mount_with_mesh_builds_once() {
    let (variant, counters) = counting_variant();
    let mut mesh = RecordingMesh::default();

    let component = MaterialComponent::mount(
        MaterialComponentDesc::new(variant),
        Some(&mut mesh),
    ).unwrap();

    assert!(component.material().is_some());
    assert_eq!(counters.creations.load(Ordering::SeqCst), 1);
    assert_eq!(mesh.attached.len(), 1);
}

// ============================================================================
// Tests: Input Updates
// ============================================================================

#[test]
fn test_set_color_updates_in_place() {
    let mut mesh = RecordingMesh::default();
    let mut component = MaterialComponent::create(
        MaterialComponentDesc::new(MaterialVariant::standard()),
        &mut mesh,
    ).unwrap();
    let material = component.material().unwrap().clone();

    component.set_color("#00ff00").unwrap();

    // Same material object, still a Color field, new components
    assert!(Arc::ptr_eq(&material, &mesh.attached[0]));
    assert_eq!(field(&material, "color"), PropValue::Color(Color::from_hex(0x00ff00)));
    assert_eq!(component.color(), "#00ff00");
    // Color updates do not request a re-upload
    assert!(!material.lock().unwrap().needs_update());
}

#[test]
fn test_set_color_invalid_propagates() {
    let mut mesh = RecordingMesh::default();
    let mut component = MaterialComponent::create(
        MaterialComponentDesc::new(MaterialVariant::points()),
        &mut mesh,
    ).unwrap();

    assert!(matches!(component.set_color("#12"), Err(Error::InvalidColor(_))));
    assert_eq!(field(component.material().unwrap(), "color"), PropValue::Color(Color::WHITE));
    // The rejected input is not recorded
    assert_eq!(component.color(), DEFAULT_COLOR);
}

#[test]
fn test_set_props_reconciles_changed_keys() {
    let mut mesh = RecordingMesh::default();
    let mut component = MaterialComponent::create(
        MaterialComponentDesc::new(MaterialVariant::physical())
            .with_prop("roughness", 0.5f32)
            .with_prop("clearcoat", 0.0f32),
        &mut mesh,
    ).unwrap();

    let applied = component.set_props(
        PropertyBag::new()
            .with("roughness", 0.5f32)
            .with("clearcoat", 1.0f32)
            .with("sheen_color", "#ff00ff"),
    ).unwrap();

    assert_eq!(applied, vec!["clearcoat".to_string(), "sheen_color".to_string()]);
    let material = component.material().unwrap();
    assert_eq!(field(material, "clearcoat"), PropValue::Float(1.0));
    assert_eq!(field(material, "sheen_color"), PropValue::Color(Color::from_hex(0xff00ff)));
    assert!(!material.lock().unwrap().needs_update());
    assert_eq!(component.props().len(), 3);
}

#[test]
fn test_failed_set_props_keeps_remaining_keys_pending() {
    let mut mesh = RecordingMesh::default();
    let mut component = MaterialComponent::create(
        MaterialComponentDesc::new(MaterialVariant::basic()),
        &mut mesh,
    ).unwrap();

    // Basic materials have no shininess: the bag fails before wireframe is applied
    let result = component.set_props(
        PropertyBag::new()
            .with("shininess", 10.0f32)
            .with("wireframe", true),
    );
    assert!(matches!(result, Err(Error::UnknownField(_))));
    assert!(component.props().is_empty());

    let applied = component.set_props(PropertyBag::new().with("wireframe", true)).unwrap();

    assert_eq!(applied, vec!["wireframe".to_string()]);
    assert_eq!(field(component.material().unwrap(), "wireframe"), PropValue::Bool(true));
    assert!(component.props().contains_key("wireframe"));
}

#[test]
fn test_inputs_on_inert_component_are_stored_only() {
    let mut component = MaterialComponent::detached(MaterialComponentDesc::new(MaterialVariant::basic()));

    component.set_color("#000000").unwrap();
    let applied = component.set_props(PropertyBag::new().with("wireframe", true)).unwrap();
    component.set_map(None).unwrap();

    assert!(applied.is_empty());
    assert_eq!(component.color(), "#000000");
    assert!(component.props().contains_key("wireframe"));
}

// ============================================================================
// Tests: Textures
// ============================================================================

#[test]
fn test_set_texture_sets_map_and_marks_dirty() {
    let mut mesh = RecordingMesh::default();
    let component = MaterialComponent::create(
        MaterialComponentDesc::new(MaterialVariant::standard()),
        &mut mesh,
    ).unwrap();
    let texture = Arc::new(Texture::new("albedo", 256, 256));

    component.set_texture(Some(texture.clone()), DEFAULT_TEXTURE_FIELD).unwrap();

    let material = component.material().unwrap();
    assert!(Arc::ptr_eq(field(material, "map").as_texture().unwrap(), &texture));
    assert!(material.lock().unwrap().needs_update());
    assert_eq!(material.lock().unwrap().version(), 1);
}

#[test]
fn test_set_texture_none_clears_and_still_marks_dirty() {
    let mut mesh = RecordingMesh::default();
    let component = MaterialComponent::create(
        MaterialComponentDesc::new(MaterialVariant::basic()),
        &mut mesh,
    ).unwrap();
    let material = component.material().unwrap().clone();

    component.set_map(Some(Arc::new(Texture::new("a", 1, 1)))).unwrap();
    material.lock().unwrap().acknowledge_upload();

    component.set_map(None).unwrap();

    assert_eq!(field(&material, "map"), PropValue::Texture(None));
    assert!(material.lock().unwrap().needs_update());
    assert_eq!(material.lock().unwrap().version(), 2);
}

#[test]
fn test_set_texture_custom_field() {
    let mut mesh = RecordingMesh::default();
    let component = MaterialComponent::create(
        MaterialComponentDesc::new(MaterialVariant::standard()),
        &mut mesh,
    ).unwrap();
    let normal = Arc::new(Texture::new("normal", 64, 64));

    component.set_texture(Some(normal.clone()), "normal_map").unwrap();

    let material = component.material().unwrap();
    assert!(Arc::ptr_eq(field(material, "normal_map").as_texture().unwrap(), &normal));
    assert_eq!(field(material, "map"), PropValue::Texture(None));
}

#[test]
fn test_set_texture_unknown_field_propagates() {
    let mut mesh = RecordingMesh::default();
    let component = MaterialComponent::create(
        MaterialComponentDesc::new(MaterialVariant::points()),
        &mut mesh,
    ).unwrap();

    let result = component.set_texture(None, "normal_map");
    assert!(matches!(result, Err(Error::UnknownField(_))));
}

// ============================================================================
// Tests: Teardown
// ============================================================================

#[test]
fn test_unmount_disposes_exactly_once() {
    let (variant, counters) = counting_variant();
    let mut mesh = RecordingMesh::default();
    let mut component = MaterialComponent::create(MaterialComponentDesc::new(variant), &mut mesh).unwrap();

    assert!(component.unmount());
    assert!(!component.unmount());
    assert!(component.is_unmounted());
    drop(component);

    assert_eq!(counters.disposals.load(Ordering::SeqCst), 1);
    assert!(mesh.attached[0].lock().unwrap().is_disposed());
}

#[test]
fn test_drop_disposes() {
    let (variant, counters) = counting_variant();
    let mut mesh = RecordingMesh::default();
    {
        let _component = MaterialComponent::create(MaterialComponentDesc::new(variant), &mut mesh).unwrap();
        assert_eq!(counters.disposals.load(Ordering::SeqCst), 0);
    }
    assert_eq!(counters.disposals.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unmount_inert_component() {
    let mut component = MaterialComponent::detached(MaterialComponentDesc::new(MaterialVariant::toon()));
    assert!(component.unmount());
    assert!(!component.unmount());
}
