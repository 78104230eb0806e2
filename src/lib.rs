pub mod emit;
pub mod error;
pub mod generator;
pub mod model;
pub mod naming;
pub mod resolver;
pub mod schema;

pub use error::{GenerateError, Result};
pub use generator::{GeneratedFile, GenerationReport, RenderedSet};
pub use schema::SchemaDocument;

use std::path::Path;

/// Generate Dart model files from JSON Schema text into `out_dir`.
pub fn generate_models(schema_text: &str, out_dir: &Path) -> Result<GenerationReport> {
    let document = parse_document(schema_text)?;
    generator::generate(&document, out_dir)
}

/// Render the model set for JSON Schema text without writing anything.
pub fn render_models(schema_text: &str) -> Result<RenderedSet> {
    let document = parse_document(schema_text)?;
    generator::render_document(&document)
}

fn parse_document(schema_text: &str) -> Result<SchemaDocument> {
    serde_json::from_str(schema_text).map_err(|e| GenerateError::ParseError(e.to_string()))
}
