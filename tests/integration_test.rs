use json_schema_to_dart::{GenerateError, RenderedSet, generate_models, naming, render_models};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const TEST_SCHEMA_PATH: &str = "tests/test_schema.json";

const EXPECTED_ROLE_ENUM: &str = "enum Role {
  adminUser,
  guest,
  unknown;

  String toMap() {
    return name;
  }

  static Role fromMap(String? raw) {
    switch (raw) {
      case 'admin_user':
        return Role.adminUser;
      case 'guest':
        return Role.guest;
      default:
        return Role.unknown;
    }
  }
}
";

fn rendered_file<'a>(set: &'a RenderedSet, path: &str) -> &'a str {
    set.files
        .iter()
        .find(|file| file.path == Path::new(path))
        .map(|file| file.contents.as_str())
        .unwrap_or_else(|| panic!("missing generated file: {path}"))
}

fn temp_out_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("json_schema_to_dart_{tag}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

/// Test the full model set rendered from the fixture schema
#[test]
fn test_library_render_example_schema() {
    let schema_content =
        fs::read_to_string(TEST_SCHEMA_PATH).expect("Failed to read test schema file");

    let rendered = render_models(&schema_content).expect("Failed to render schema");

    let paths: Vec<_> = rendered.files.iter().map(|f| f.path.clone()).collect();
    assert!(paths.contains(&PathBuf::from("user/user.dart")));
    assert!(paths.contains(&PathBuf::from("address/address.dart")));
    assert!(paths.contains(&PathBuf::from("order/order.dart")));
    assert!(paths.contains(&PathBuf::from("enums/role.dart")));
    assert!(rendered.warnings.is_empty(), "unexpected warnings: {:?}", rendered.warnings);

    let user = rendered_file(&rendered, "user/user.dart");

    // field declarations, insertion order, all optional
    assert!(user.contains("final String? name;"));
    assert!(user.contains("final bool? isActive;"));
    assert!(user.contains("final Role? role;"));
    assert!(user.contains("final Address? address;"));
    assert!(user.contains("final List<String>? tags;"));
    assert!(user.contains("final List<Order>? orders;"));

    // imports carried on the artifact
    assert!(user.contains("import 'dart:convert';"));
    assert!(user.contains("import '../enums/role.dart';"));
    assert!(user.contains("import '../address/address.dart';"));
    assert!(user.contains("import '../order/order.dart';"));

    // reference fields delegate rather than raw-assign
    assert!(user.contains("Address.fromMap(map['address'])"));
    assert!(user.contains(".map((item) => Order.fromMap(item)).toList()"));

    // toMap omits absent fields and mirrors the delegation
    assert!(user.contains("if (name != null) 'name': name,"));
    assert!(user.contains("if (address != null) 'address': address!.toMap(),"));
    assert!(user.contains("if (orders != null) 'orders': orders!.map((item) => item.toMap()).toList(),"));

    // unmapped primitive ("number") degrades to dynamic
    let order = rendered_file(&rendered, "order/order.dart");
    assert!(order.contains("dynamic amount;"));
    assert!(order.contains("final Map<String, dynamic>? metadata;"));
    assert!(order.contains("amount: map['amount'],"));
}

/// Test the generated enum file byte-for-byte
#[test]
fn test_enum_file_matches_expected() {
    let schema = r#"{"definitions":{"User":{"properties":{"role":{"enum":["admin_user","guest"]}}}}}"#;

    let rendered = render_models(schema).expect("Failed to render schema");

    assert_eq!(rendered_file(&rendered, "enums/role.dart"), EXPECTED_ROLE_ENUM);
}

/// Test that an enum emits one member per literal plus the sentinel, and that
/// fromMap is total
#[test]
fn test_enum_members_and_total_from_map() {
    let schema = r#"{"definitions":{"Task":{"properties":{"status":{"enum":["IN_PROGRESS","done","onHold"]}}}}}"#;

    let rendered = render_models(schema).expect("Failed to render schema");
    let status = rendered_file(&rendered, "enums/status.dart");

    // snake, SCREAMING_SNAKE and lowerCamel literals all normalize to lowerCamel
    assert!(status.contains("  inProgress,\n"));
    assert!(status.contains("  done,\n"));
    assert!(status.contains("  onHold,\n"));
    assert!(status.contains("  unknown;\n"));

    // one case per original literal, plus the catch-all
    assert_eq!(status.matches("case '").count(), 3);
    assert!(status.contains("case 'IN_PROGRESS':"));
    assert!(status.contains("default:\n        return Status.unknown;"));
}

/// Test the case-transform consistency property
#[test]
fn test_case_transforms_are_consistent() {
    for identifier in ["user_profile", "userProfile", "UserProfile", "role", "zip_code"] {
        let type_case = naming::to_type_case(identifier);
        let field_case = naming::to_field_case(identifier);

        assert_eq!(
            type_case.to_lowercase(),
            field_case.to_lowercase(),
            "type and field case diverge beyond the first character for {identifier}"
        );
        assert_eq!(type_case[1..], field_case[1..]);
        assert!(type_case.starts_with(|c: char| c.is_uppercase()));
        assert!(field_case.starts_with(|c: char| c.is_lowercase()));
    }

    assert_eq!(naming::to_directory_name("UserProfile"), "user_profile");
    assert_eq!(naming::to_type_case("user_profile"), "UserProfile");
    assert_eq!(naming::to_field_case("user_profile"), "userProfile");
}

/// Test error handling for a schema without a definitions table
#[test]
fn test_missing_definitions_is_an_error() {
    let schema = r#"{"title": "no definitions here"}"#;

    let result = render_models(schema);
    assert!(matches!(result, Err(GenerateError::MissingDefinitions)));
}

/// Test error handling for malformed JSON
#[test]
fn test_malformed_json_is_an_error() {
    let malformed = r#"{"definitions": {"User": }"#;

    let result = render_models(malformed);
    assert!(matches!(result, Err(GenerateError::ParseError(_))));
}

/// Test that an empty definitions table is a success with zero files
#[test]
fn test_empty_definitions_generates_nothing() {
    let schema = r#"{"definitions":{}}"#;

    let rendered = render_models(schema).expect("empty definitions should not be an error");
    assert!(rendered.files.is_empty());

    let out_dir = temp_out_dir("empty");
    let report = generate_models(schema, &out_dir).expect("generation should succeed");
    assert!(report.written.is_empty());
    let _ = fs::remove_dir_all(&out_dir);
}

/// Test that regenerating into the same directory yields byte-identical files
#[test]
fn test_generation_is_idempotent() {
    let schema_content =
        fs::read_to_string(TEST_SCHEMA_PATH).expect("Failed to read test schema file");
    let out_dir = temp_out_dir("idempotent");

    let first = generate_models(&schema_content, &out_dir).expect("first generation failed");
    let first_bytes: Vec<Vec<u8>> = first
        .written
        .iter()
        .map(|path| fs::read(path).expect("Failed to read generated file"))
        .collect();

    let second = generate_models(&schema_content, &out_dir).expect("second generation failed");
    assert_eq!(first.written, second.written);

    for (path, expected) in second.written.iter().zip(&first_bytes) {
        let actual = fs::read(path).expect("Failed to read regenerated file");
        assert_eq!(&actual, expected, "regeneration changed {}", path.display());
    }

    let _ = fs::remove_dir_all(&out_dir);
}

/// Test that an unresolved $ref degrades to a dynamic field with a warning
#[test]
fn test_unresolved_reference_degrades_to_dynamic() {
    let schema = r##"{"definitions":{"User":{"properties":{"home":{"$ref":"#/definitions/Nothing"}}}}}"##;

    let rendered = render_models(schema).expect("Failed to render schema");
    assert_eq!(rendered.warnings.len(), 1);
    assert!(rendered.warnings[0].contains("Nothing"));

    let user = rendered_file(&rendered, "user/user.dart");
    assert!(user.contains("dynamic home;"));
    assert!(user.contains("home: map['home'],"));
}

/// Test that a $ref is resolved before falling back to dynamic when the
/// declared type is unrecognized
#[test]
fn test_reference_resolved_before_dynamic_fallback() {
    let schema = r##"{"definitions":{
        "Invoice":{"properties":{"billing":{"type":"number","$ref":"#/definitions/Address"}}},
        "Address":{"properties":{"street":{"type":"string"}}}
    }}"##;

    let rendered = render_models(schema).expect("Failed to render schema");
    let invoice = rendered_file(&rendered, "invoice/invoice.dart");

    assert!(invoice.contains("final Address? billing;"));
    assert!(invoice.contains("Address.fromMap(map['billing'])"));
}

/// Test an enum declared on an array-typed property
#[test]
fn test_enum_array_property() {
    let schema = r#"{"definitions":{"Palette":{"properties":{"colors":{"type":"array","enum":["deep_red","blue"]}}}}}"#;

    let rendered = render_models(schema).expect("Failed to render schema");
    let palette = rendered_file(&rendered, "palette/palette.dart");

    assert!(palette.contains("final List<Colors>? colors;"));
    assert!(palette.contains("import '../enums/colors.dart';"));
    assert!(palette.contains(".map((item) => Colors.fromMap(item)).toList()"));
    assert!(rendered.files.iter().any(|f| f.path == Path::new("enums/colors.dart")));
}

/// Test that a self-referencing definition resolves by name without importing
/// its own file
#[test]
fn test_self_reference_has_no_self_import() {
    let schema = r##"{"definitions":{"Node":{"properties":{"next":{"$ref":"#/definitions/Node"}}}}}"##;

    let rendered = render_models(schema).expect("Failed to render schema");
    let node = rendered_file(&rendered, "node/node.dart");

    assert!(node.contains("final Node? next;"));
    assert!(node.contains("Node.fromMap(map['next'])"));
    assert!(!node.contains("import '../node/node.dart';"));
}

/// Test a definition without properties
#[test]
fn test_definition_without_properties() {
    let schema = r#"{"definitions":{"Marker":{}}}"#;

    let rendered = render_models(schema).expect("Failed to render schema");
    let marker = rendered_file(&rendered, "marker/marker.dart");

    assert!(marker.contains("class Marker {"));
    assert!(marker.contains("Marker();"));
    assert!(marker.contains("return true;"));
    assert!(marker.contains("return 0;"));
}

/// Test the CLI by running the binary against the fixture schema
#[test]
fn test_cli_generates_model_tree() {
    let out_dir = temp_out_dir("cli");

    let output = Command::new("cargo")
        .args([
            "run",
            "--bin",
            "json-schema-to-dart",
            "--",
            TEST_SCHEMA_PATH,
            out_dir.to_str().expect("temp dir is not valid UTF-8"),
        ])
        .output()
        .expect("Failed to execute CLI command");

    assert!(
        output.status.success(),
        "CLI command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(out_dir.join("user").join("user.dart").exists());
    assert!(out_dir.join("enums").join("role.dart").exists());

    let _ = fs::remove_dir_all(&out_dir);
}
