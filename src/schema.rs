use indexmap::IndexMap;
use serde::Deserialize;

/// The parsed input document. Only the `definitions` table is consulted;
/// everything else in the schema is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaDocument {
    pub definitions: Option<IndexMap<String, Definition>>,
}

/// One named object schema inside the `definitions` table. Property order is
/// the schema's insertion order and is preserved through generation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub properties: IndexMap<String, PropertyObject>,
}

/// Raw type-describing fragment of a single property, as deserialized.
/// Classified into a [`PropertySchema`] before any generation runs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyObject {
    #[serde(rename = "type")]
    pub type_: Option<SchemaType>,

    #[serde(rename = "$ref")]
    pub ref_: Option<String>,

    #[serde(rename = "enum")]
    pub enum_: Option<Vec<String>>,

    pub items: Option<Box<PropertyObject>>,
}

/// `type` may be a single name or a list of names (e.g. `["string", "null"]`).
/// Unrecognized names are kept as-is and later resolve to `dynamic`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Multiple(Vec<String>),
}

/// Recognized primitive `type` values and their fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Integer,
    String,
    Boolean,
    Object,
    Dynamic,
}

impl Primitive {
    fn from_schema_type(name: &str) -> Option<Self> {
        match name {
            "integer" => Some(Primitive::Integer),
            "string" => Some(Primitive::String),
            "boolean" => Some(Primitive::Boolean),
            "object" => Some(Primitive::Object),
            _ => None,
        }
    }
}

/// Tagged union over the property shapes the generator understands.
/// Exactly one kind applies per property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertySchema {
    Primitive(Primitive),
    /// Target definition name, i.e. the last segment of the `$ref` pointer.
    Reference(String),
    Array(Box<PropertySchema>),
    Enum(Vec<String>),
}

impl PropertyObject {
    fn type_entries(&self) -> Vec<&str> {
        match &self.type_ {
            Some(SchemaType::Single(name)) => vec![name.as_str()],
            Some(SchemaType::Multiple(names)) => names.iter().map(String::as_str).collect(),
            None => Vec::new(),
        }
    }

    fn has_type(&self, name: &str) -> bool {
        self.type_entries().contains(&name)
    }

    fn ref_target(&self) -> Option<String> {
        let pointer = self.ref_.as_deref()?;
        pointer.rsplit('/').next().map(str::to_string)
    }

    /// Classify this fragment into its single applicable kind.
    ///
    /// `enum` wins over `type` and `$ref`; an enum on an array-typed property
    /// classifies as an array of that enum. A recognized primitive `type`
    /// wins over `$ref`, but a `$ref` is resolved before falling back to the
    /// dynamic placeholder when no `type` entry is recognized.
    pub fn classify(&self) -> PropertySchema {
        if let Some(values) = &self.enum_ {
            let inner = PropertySchema::Enum(values.clone());
            if self.has_type("array") {
                return PropertySchema::Array(Box::new(inner));
            }
            return inner;
        }

        if self.has_type("array") {
            let element = match &self.items {
                Some(items) => items.classify(),
                None => PropertySchema::Primitive(Primitive::Dynamic),
            };
            return PropertySchema::Array(Box::new(element));
        }

        for entry in self.type_entries() {
            if let Some(primitive) = Primitive::from_schema_type(entry) {
                return PropertySchema::Primitive(primitive);
            }
        }

        if let Some(target) = self.ref_target() {
            return PropertySchema::Reference(target);
        }

        PropertySchema::Primitive(Primitive::Dynamic)
    }
}
