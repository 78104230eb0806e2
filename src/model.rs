use crate::naming;

/// Resolved target type of a single field, kept structured so the renderer
/// can decide how the field participates in `fromMap`/`toMap`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// A mapped Dart primitive (`int`, `String`, `bool`, `Map<String, dynamic>`).
    Primitive(&'static str),
    /// Another model, stored by its definition name.
    Model(String),
    /// A generated enum, stored by its type-cased name.
    Enum(String),
    List(Box<FieldType>),
    Dynamic,
}

impl FieldType {
    pub fn dart_name(&self) -> String {
        match self {
            FieldType::Primitive(name) => (*name).to_string(),
            FieldType::Model(definition) => naming::to_type_case(definition),
            FieldType::Enum(name) => name.clone(),
            FieldType::List(element) => format!("List<{}>", element.dart_name()),
            FieldType::Dynamic => "dynamic".to_string(),
        }
    }

    /// Relative import needed by a model file using this type, if any.
    /// `self_definition` suppresses self-imports on cyclic references.
    pub fn import(&self, self_definition: &str) -> Option<String> {
        match self {
            FieldType::Model(definition) => {
                let dir = naming::to_directory_name(definition);
                if dir == naming::to_directory_name(self_definition) {
                    return None;
                }
                Some(format!("../{dir}/{dir}.dart"))
            }
            FieldType::Enum(name) => {
                Some(format!("../enums/{}.dart", naming::to_directory_name(name)))
            }
            FieldType::List(element) => element.import(self_definition),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field-cased name; doubles as the map key in `fromMap`/`toMap`.
    pub name: String,
    pub ty: FieldType,
}

/// One generated model class, imports carried explicitly on the artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelType {
    pub name: String,
    pub imports: Vec<String>,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    /// The literal as it appears in the schema, matched verbatim in `fromMap`.
    pub raw: String,
    /// Field-cased member name.
    pub member: String,
}

/// One generated enum. The trailing `unknown` sentinel is implicit: it is not
/// stored here and is always rendered after the listed members.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    pub name: String,
    pub members: Vec<EnumMember>,
}

impl EnumType {
    /// Members keep the input order; duplicates after normalization are the
    /// schema author's to avoid, not corrected here.
    pub fn new(name: String, literals: &[String]) -> Self {
        let members = literals
            .iter()
            .map(|raw| EnumMember {
                raw: raw.clone(),
                member: naming::to_field_case(raw),
            })
            .collect();
        Self { name, members }
    }

    pub fn file_stem(&self) -> String {
        naming::to_directory_name(&self.name)
    }
}
