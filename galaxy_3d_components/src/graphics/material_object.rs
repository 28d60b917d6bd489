/// Reference material implementation for the seven material kinds.
///
/// A MaterialObject is a flat, ordered table of named fields whose layout
/// is fixed by its MaterialKind. Field defaults follow the usual
/// forward-renderer conventions (white base color, roughness 1, ior 1.5...).
///
/// Architecture:
/// - Field table: declared once per kind, values replaced or mutated in place
/// - Re-upload flag: raised on request, cleared by the backend after upload
/// - Disposal: counted, the object stays readable afterwards

use rustc_hash::FxHashMap;
use glam::Vec2;
use crate::error::Result;
use crate::scene_bail;
use super::{Color, GraphicsMaterial, MaterialKind, PropValue};

/// Env map blend operation (multiply)
const COMBINE_MULTIPLY: i32 = 0;

/// Face culling side (front faces only)
const SIDE_FRONT: i32 = 0;

// ===== FIELD SCHEMAS =====

type FieldList = Vec<(&'static str, PropValue)>;

fn tex() -> PropValue {
    PropValue::Texture(None)
}

/// Fields every material carries
fn common_fields() -> FieldList {
    vec![
        ("opacity", PropValue::Float(1.0)),
        ("transparent", PropValue::Bool(false)),
        ("side", PropValue::Int(SIDE_FRONT)),
        ("visible", PropValue::Bool(true)),
        ("depth_test", PropValue::Bool(true)),
        ("depth_write", PropValue::Bool(true)),
        ("alpha_test", PropValue::Float(0.0)),
        ("vertex_colors", PropValue::Bool(false)),
        ("tone_mapped", PropValue::Bool(true)),
    ]
}

fn light_and_ao_maps() -> FieldList {
    vec![
        ("light_map", tex()),
        ("light_map_intensity", PropValue::Float(1.0)),
        ("ao_map", tex()),
        ("ao_map_intensity", PropValue::Float(1.0)),
    ]
}

fn emissive_fields() -> FieldList {
    vec![
        ("emissive", PropValue::Color(Color::BLACK)),
        ("emissive_intensity", PropValue::Float(1.0)),
        ("emissive_map", tex()),
    ]
}

fn surface_detail_maps() -> FieldList {
    vec![
        ("bump_map", tex()),
        ("bump_scale", PropValue::Float(1.0)),
        ("normal_map", tex()),
        ("normal_scale", PropValue::Vec2(Vec2::ONE)),
        ("displacement_map", tex()),
        ("displacement_scale", PropValue::Float(1.0)),
        ("displacement_bias", PropValue::Float(0.0)),
    ]
}

fn env_map_fields() -> FieldList {
    vec![
        ("env_map", tex()),
        ("combine", PropValue::Int(COMBINE_MULTIPLY)),
        ("reflectivity", PropValue::Float(1.0)),
        ("refraction_ratio", PropValue::Float(0.98)),
    ]
}

fn wireframe_and_fog() -> FieldList {
    vec![
        ("wireframe", PropValue::Bool(false)),
        ("wireframe_linewidth", PropValue::Float(1.0)),
        ("fog", PropValue::Bool(true)),
    ]
}

fn standard_fields() -> FieldList {
    let mut fields = vec![
        ("color", PropValue::Color(Color::WHITE)),
        ("roughness", PropValue::Float(1.0)),
        ("metalness", PropValue::Float(0.0)),
        ("map", tex()),
    ];
    fields.extend(light_and_ao_maps());
    fields.extend(emissive_fields());
    fields.extend(surface_detail_maps());
    fields.extend([
        ("roughness_map", tex()),
        ("metalness_map", tex()),
        ("alpha_map", tex()),
        ("env_map", tex()),
        ("env_map_intensity", PropValue::Float(1.0)),
        ("flat_shading", PropValue::Bool(false)),
    ]);
    fields.extend(wireframe_and_fog());
    fields
}

/// Kind-specific fields followed by the common ones
fn schema(kind: MaterialKind) -> FieldList {
    let mut fields = match kind {
        MaterialKind::Basic => {
            let mut fields = vec![
                ("color", PropValue::Color(Color::WHITE)),
                ("map", tex()),
                ("specular_map", tex()),
                ("alpha_map", tex()),
            ];
            fields.extend(light_and_ao_maps());
            fields.extend(env_map_fields());
            fields.extend(wireframe_and_fog());
            fields
        }
        MaterialKind::Lambert | MaterialKind::Phong => {
            let mut fields = vec![
                ("color", PropValue::Color(Color::WHITE)),
                ("map", tex()),
            ];
            if kind == MaterialKind::Phong {
                fields.extend([
                    ("specular", PropValue::Color(Color::from_hex(0x111111))),
                    ("shininess", PropValue::Float(30.0)),
                ]);
            }
            fields.extend(light_and_ao_maps());
            fields.extend(emissive_fields());
            fields.extend(surface_detail_maps());
            fields.extend([
                ("specular_map", tex()),
                ("alpha_map", tex()),
                ("flat_shading", PropValue::Bool(false)),
            ]);
            fields.extend(env_map_fields());
            fields.extend(wireframe_and_fog());
            fields
        }
        MaterialKind::Standard => standard_fields(),
        MaterialKind::Physical => {
            let mut fields = standard_fields();
            fields.extend([
                ("clearcoat", PropValue::Float(0.0)),
                ("clearcoat_map", tex()),
                ("clearcoat_roughness", PropValue::Float(0.0)),
                ("clearcoat_roughness_map", tex()),
                ("clearcoat_normal_map", tex()),
                ("ior", PropValue::Float(1.5)),
                ("sheen", PropValue::Float(0.0)),
                ("sheen_color", PropValue::Color(Color::BLACK)),
                ("sheen_roughness", PropValue::Float(1.0)),
                ("transmission", PropValue::Float(0.0)),
                ("transmission_map", tex()),
                ("thickness", PropValue::Float(0.0)),
                ("attenuation_distance", PropValue::Float(f32::INFINITY)),
                ("attenuation_color", PropValue::Color(Color::WHITE)),
                ("specular_intensity", PropValue::Float(1.0)),
                ("specular_color", PropValue::Color(Color::WHITE)),
                ("iridescence", PropValue::Float(0.0)),
                ("anisotropy", PropValue::Float(0.0)),
            ]);
            fields
        }
        MaterialKind::Points => vec![
            ("color", PropValue::Color(Color::WHITE)),
            ("map", tex()),
            ("alpha_map", tex()),
            ("size", PropValue::Float(1.0)),
            ("size_attenuation", PropValue::Bool(true)),
            ("fog", PropValue::Bool(true)),
        ],
        MaterialKind::Toon => {
            let mut fields = vec![
                ("color", PropValue::Color(Color::WHITE)),
                ("map", tex()),
                ("gradient_map", tex()),
            ];
            fields.extend(light_and_ao_maps());
            fields.extend(emissive_fields());
            fields.extend(surface_detail_maps());
            fields.push(("alpha_map", tex()));
            fields.extend(wireframe_and_fog());
            fields
        }
    };
    fields.extend(common_fields());
    fields
}

// ===== MATERIAL OBJECT =====

/// In-memory material of one of the seven kinds
pub struct MaterialObject {
    kind: MaterialKind,
    fields: Vec<(&'static str, PropValue)>,
    field_names: FxHashMap<&'static str, usize>,
    needs_update: bool,
    version: u64,
    dispose_count: u32,
}

impl MaterialObject {
    /// Create a material with default field values
    pub fn new(kind: MaterialKind) -> Self {
        let fields = schema(kind);
        let field_names = fields
            .iter()
            .enumerate()
            .map(|(index, (name, _))| (*name, index))
            .collect();

        Self {
            kind,
            fields,
            field_names,
            needs_update: false,
            version: 0,
            dispose_count: 0,
        }
    }

    /// Create a material and apply construction options
    ///
    /// Unknown option names are skipped with a warning. Color fields are
    /// set in place from any color-convertible value; other fields are
    /// replaced and must have a compatible type.
    pub fn from_options<'a, I>(kind: MaterialKind, options: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a PropValue)>,
    {
        let mut material = Self::new(kind);
        for (name, value) in options {
            match material.field_mut(name) {
                None => {
                    crate::scene_warn!("galaxy3d::MaterialObject",
                        "'{}' is not a property of {} material, ignored", name, kind);
                }
                Some(PropValue::Color(color)) => color.set(value)?,
                Some(_) => material.set_field(name, value.clone())?,
            }
        }
        Ok(material)
    }

    /// Number of `dispose` calls received
    pub fn dispose_count(&self) -> u32 {
        self.dispose_count
    }

    /// Number of fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl GraphicsMaterial for MaterialObject {
    fn kind(&self) -> MaterialKind {
        self.kind
    }

    fn field(&self, name: &str) -> Option<&PropValue> {
        let index = self.field_names.get(name)?;
        self.fields.get(*index).map(|(_, value)| value)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut PropValue> {
        let index = self.field_names.get(name)?;
        self.fields.get_mut(*index).map(|(_, value)| value)
    }

    fn set_field(&mut self, name: &str, value: PropValue) -> Result<()> {
        let kind = self.kind;
        let Some(current) = self.field_mut(name) else {
            scene_bail!("galaxy3d::MaterialObject", UnknownField,
                "'{}' is not a property of {} material", name, kind);
        };

        let found = value.type_name();
        match value.coerce_to(current) {
            Some(value) => {
                *current = value;
                Ok(())
            }
            None => {
                let expected = current.type_name();
                scene_bail!("galaxy3d::MaterialObject", FieldTypeMismatch,
                    "'{}' on {} material expects {}, got {}", name, kind, expected, found);
            }
        }
    }

    fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }

    fn set_needs_update(&mut self, value: bool) {
        if value {
            self.needs_update = true;
            self.version += 1;
        }
    }

    fn needs_update(&self) -> bool {
        self.needs_update
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn acknowledge_upload(&mut self) {
        self.needs_update = false;
    }

    fn dispose(&mut self) {
        self.dispose_count += 1;
        crate::scene_debug!("galaxy3d::MaterialObject", "Disposed {} material", self.kind);
    }

    fn is_disposed(&self) -> bool {
        self.dispose_count > 0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "material_object_tests.rs"]
mod tests;
