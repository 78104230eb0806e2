use json_schema_to_dart::render_models;

fn main() {
    // Example 1: primitives and an inline enum
    let schema1 = r#"{
        "definitions": {
            "User": {
                "properties": {
                    "name": { "type": "string" },
                    "age": { "type": "integer" },
                    "role": { "enum": ["admin_user", "guest"] }
                }
            }
        }
    }"#;

    println!("=== Example 1: Primitives and an inline enum ===");
    print_rendered(schema1);

    // Example 2: references and arrays of references
    let schema2 = r##"{
        "definitions": {
            "Account": {
                "properties": {
                    "owner": { "$ref": "#/definitions/User" },
                    "delegates": {
                        "type": "array",
                        "items": { "$ref": "#/definitions/User" }
                    }
                }
            },
            "User": {
                "properties": {
                    "id": { "type": "integer" },
                    "username": { "type": "string" }
                }
            }
        }
    }"##;

    println!("=== Example 2: References ===");
    print_rendered(schema2);

    // Example 3: unresolved reference degrades to dynamic with a warning
    let schema3 = r##"{
        "definitions": {
            "Order": {
                "properties": {
                    "customer": { "$ref": "#/definitions/Customer" },
                    "total": { "type": "number" }
                }
            }
        }
    }"##;

    println!("=== Example 3: Unresolved reference ===");
    print_rendered(schema3);
}

fn print_rendered(schema: &str) {
    let rendered = render_models(schema).unwrap();
    for warning in &rendered.warnings {
        eprintln!("warning: {warning}");
    }
    for file in &rendered.files {
        println!("--- {} ---", file.path.display());
        println!("{}", file.contents);
    }
}
