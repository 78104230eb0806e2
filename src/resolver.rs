use indexmap::IndexMap;

use crate::model::{EnumType, FieldType};
use crate::naming;
use crate::schema::{Definition, Primitive, PropertySchema};

/// Outcome of resolving one property: its field type, any enum artifacts the
/// property spawned, and non-fatal diagnostics.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub ty: FieldType,
    pub enums: Vec<EnumType>,
    pub warnings: Vec<String>,
}

impl Resolution {
    fn of(ty: FieldType) -> Self {
        Self {
            ty,
            enums: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

fn primitive_dart_type(primitive: Primitive) -> FieldType {
    match primitive {
        Primitive::Integer => FieldType::Primitive("int"),
        Primitive::String => FieldType::Primitive("String"),
        Primitive::Boolean => FieldType::Primitive("bool"),
        Primitive::Object => FieldType::Primitive("Map<String, dynamic>"),
        Primitive::Dynamic => FieldType::Dynamic,
    }
}

/// Determine the Dart type for one property.
///
/// Enum properties each produce their own independently named enum type,
/// named after the property (never deduplicated across properties sharing a
/// value set). References are checked against the definitions table by
/// resolved simple name; an unresolved reference degrades to `dynamic` with a
/// warning rather than failing the run.
pub fn resolve(
    property_name: &str,
    schema: &PropertySchema,
    definitions: &IndexMap<String, Definition>,
) -> Resolution {
    match schema {
        PropertySchema::Enum(literals) => {
            let enum_type = EnumType::new(naming::to_type_case(property_name), literals);
            let mut resolution = Resolution::of(FieldType::Enum(enum_type.name.clone()));
            resolution.enums.push(enum_type);
            resolution
        }
        PropertySchema::Reference(target) => {
            if definitions.contains_key(target) {
                Resolution::of(FieldType::Model(target.clone()))
            } else {
                let mut resolution = Resolution::of(FieldType::Dynamic);
                resolution.warnings.push(format!(
                    "unresolved $ref '{target}' on property '{property_name}', using dynamic"
                ));
                resolution
            }
        }
        PropertySchema::Array(element) => {
            let mut resolution = resolve(property_name, element, definitions);
            resolution.ty = FieldType::List(Box::new(resolution.ty));
            resolution
        }
        PropertySchema::Primitive(primitive) => Resolution::of(primitive_dart_type(*primitive)),
    }
}
