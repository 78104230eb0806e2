use indexmap::IndexMap;

use crate::model::{EnumType, Field, FieldType, ModelType};
use crate::naming;
use crate::resolver;
use crate::schema::Definition;

/// IR for one definition plus everything its properties spawned.
#[derive(Debug, Clone)]
pub struct ModelBuild {
    pub model: ModelType,
    pub enums: Vec<EnumType>,
    pub warnings: Vec<String>,
}

/// Build the model IR for one definition. Property insertion order is
/// preserved; every field is optionality-qualified regardless of any
/// `required` list in the schema.
pub fn build_model(
    definition_name: &str,
    definition: &Definition,
    definitions: &IndexMap<String, Definition>,
) -> ModelBuild {
    let mut fields = Vec::new();
    let mut imports: Vec<String> = Vec::new();
    let mut enums = Vec::new();
    let mut warnings = Vec::new();

    for (property_name, property) in &definition.properties {
        let resolution = resolver::resolve(property_name, &property.classify(), definitions);

        if let Some(import) = resolution.ty.import(definition_name) {
            if !imports.contains(&import) {
                imports.push(import);
            }
        }
        enums.extend(resolution.enums);
        warnings.extend(resolution.warnings);

        fields.push(Field {
            name: naming::to_field_case(property_name),
            ty: resolution.ty,
        });
    }

    ModelBuild {
        model: ModelType {
            name: naming::to_type_case(definition_name),
            imports,
            fields,
        },
        enums,
        warnings,
    }
}

fn field_declaration(field: &Field) -> String {
    let dart_type = field.ty.dart_name();
    // `dynamic` already admits null; `dynamic?` is invalid Dart
    if dart_type == "dynamic" {
        format!("dynamic {}", field.name)
    } else {
        format!("{dart_type}? {}", field.name)
    }
}

fn from_map_expr(field: &Field) -> String {
    let key = format!("map['{}']", field.name);
    match &field.ty {
        FieldType::Model(definition) => {
            let type_name = naming::to_type_case(definition);
            format!("{key} == null ? null : {type_name}.fromMap({key})")
        }
        FieldType::Enum(name) => format!("{key} == null ? null : {name}.fromMap({key})"),
        FieldType::List(element) => match element.as_ref() {
            FieldType::Model(definition) => {
                let type_name = naming::to_type_case(definition);
                format!(
                    "{key} == null\n          ? null\n          : ({key} as List).map((item) => {type_name}.fromMap(item)).toList()"
                )
            }
            FieldType::Enum(name) => format!(
                "{key} == null\n          ? null\n          : ({key} as List).map((item) => {name}.fromMap(item)).toList()"
            ),
            FieldType::Primitive(dart_type) => {
                format!("{key} == null ? null : List<{dart_type}>.from({key})")
            }
            _ => key,
        },
        _ => key,
    }
}

fn to_map_value(field: &Field) -> String {
    let name = &field.name;
    match &field.ty {
        FieldType::Model(_) | FieldType::Enum(_) => format!("{name}!.toMap()"),
        FieldType::List(element)
            if matches!(element.as_ref(), FieldType::Model(_) | FieldType::Enum(_)) =>
        {
            format!("{name}!.map((item) => item.toMap()).toList()")
        }
        _ => name.clone(),
    }
}

/// Render one model class as Dart source.
pub fn render_model(model: &ModelType) -> String {
    let name = &model.name;
    let mut output = String::from("import 'dart:convert';\n");

    for import in &model.imports {
        output.push_str(&format!("import '{import}';\n"));
    }

    output.push_str(&format!("\nclass {name} {{\n"));

    for field in &model.fields {
        output.push_str(&format!("  final {};\n", field_declaration(field)));
    }

    // Constructor: one optional named parameter per field, no defaults.
    if model.fields.is_empty() {
        output.push_str(&format!("\n  {name}();\n"));
    } else {
        output.push_str(&format!("\n  {name}({{\n"));
        for field in &model.fields {
            output.push_str(&format!("    this.{},\n", field.name));
        }
        output.push_str("  });\n");
    }

    // fromMap
    output.push_str(&format!(
        "\n  factory {name}.fromMap(Map<String, dynamic> map) {{\n"
    ));
    if model.fields.is_empty() {
        output.push_str(&format!("    return {name}();\n"));
    } else {
        output.push_str(&format!("    return {name}(\n"));
        for field in &model.fields {
            output.push_str(&format!("      {}: {},\n", field.name, from_map_expr(field)));
        }
        output.push_str("    );\n");
    }
    output.push_str("  }\n");

    // toMap: absent fields are omitted outright, never emitted as null
    output.push_str("\n  Map<String, dynamic> toMap() {\n    return {\n");
    for field in &model.fields {
        output.push_str(&format!(
            "      if ({} != null) '{}': {},\n",
            field.name,
            field.name,
            to_map_value(field)
        ));
    }
    output.push_str("    };\n  }\n");

    output.push_str("\n  String toJson() => jsonEncode(toMap());\n");
    output.push_str(&format!(
        "\n  factory {name}.fromJson(String source) =>\n      {name}.fromMap(jsonDecode(source) as Map<String, dynamic>);\n"
    ));

    // toString: diagnostic dump, no escaping of embedded values
    output.push_str(&format!(
        "\n  @override\n  String toString() {{\n    return '{name}(\\n'\n"
    ));
    for field in &model.fields {
        output.push_str(&format!("        '{}: ${}\\n'\n", field.name, field.name));
    }
    output.push_str("        ')';\n  }\n");

    // value equality over the declared field set
    output.push_str("\n  @override\n  bool operator ==(Object other) {\n");
    output.push_str("    if (identical(this, other)) return true;\n");
    output.push_str("    if (other.runtimeType != runtimeType) return false;\n");
    if model.fields.is_empty() {
        output.push_str("    return true;\n");
    } else {
        output.push_str(&format!("    final {name} typedOther = other as {name};\n"));
        let comparisons: Vec<String> = model
            .fields
            .iter()
            .map(|field| format!("typedOther.{} == {}", field.name, field.name))
            .collect();
        output.push_str(&format!(
            "    return {};\n",
            comparisons.join(" &&\n        ")
        ));
    }
    output.push_str("  }\n");

    output.push_str("\n  @override\n  int get hashCode {\n");
    if model.fields.is_empty() {
        output.push_str("    return 0;\n");
    } else {
        let contributions: Vec<String> = model
            .fields
            .iter()
            .map(|field| format!("{}.hashCode", field.name))
            .collect();
        output.push_str(&format!(
            "    return {};\n",
            contributions.join(" ^\n        ")
        ));
    }
    output.push_str("  }\n}\n");

    output
}

/// Render one enum as Dart source: members in input order, the `unknown`
/// sentinel last, `toMap` returning the member's textual name and a total
/// `fromMap` matching the original literals.
pub fn render_enum(enum_type: &EnumType) -> String {
    let name = &enum_type.name;
    let mut output = format!("enum {name} {{\n");

    for member in &enum_type.members {
        output.push_str(&format!("  {},\n", member.member));
    }
    output.push_str("  unknown;\n");

    output.push_str("\n  String toMap() {\n    return name;\n  }\n");

    output.push_str(&format!(
        "\n  static {name} fromMap(String? raw) {{\n    switch (raw) {{\n"
    ));
    for member in &enum_type.members {
        output.push_str(&format!(
            "      case '{}':\n        return {name}.{};\n",
            member.raw, member.member
        ));
    }
    output.push_str(&format!(
        "      default:\n        return {name}.unknown;\n    }}\n  }}\n}}\n"
    ));

    output
}
