use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::emit;
use crate::error::{GenerateError, Result};
use crate::naming;
use crate::schema::SchemaDocument;

/// One rendered artifact, addressed relative to the output root.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Pure rendering result: the files that would be written, plus warnings.
#[derive(Debug, Clone, Default)]
pub struct RenderedSet {
    pub files: Vec<GeneratedFile>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

/// Render every definition without touching the file system.
///
/// Layout: `<snake>/<snake>.dart` per definition plus a shared flat
/// `enums/<snake>.dart` per enum-typed property. Enum files are keyed by
/// property name, so same-named properties across definitions collide and the
/// last rendered one wins.
pub fn render_document(document: &SchemaDocument) -> Result<RenderedSet> {
    let definitions = document
        .definitions
        .as_ref()
        .ok_or(GenerateError::MissingDefinitions)?;

    let mut files: IndexMap<PathBuf, String> = IndexMap::new();
    let mut warnings = Vec::new();

    for (definition_name, definition) in definitions {
        let build = emit::build_model(definition_name, definition, definitions);
        warnings.extend(build.warnings);

        for enum_type in &build.enums {
            let path = PathBuf::from("enums").join(format!("{}.dart", enum_type.file_stem()));
            files.insert(path, emit::render_enum(enum_type));
        }

        let dir = naming::to_directory_name(definition_name);
        let path = PathBuf::from(&dir).join(format!("{dir}.dart"));
        files.insert(path, emit::render_model(&build.model));
    }

    Ok(RenderedSet {
        files: files
            .into_iter()
            .map(|(path, contents)| GeneratedFile { path, contents })
            .collect(),
        warnings,
    })
}

/// Render and write the model tree under `out_root`, overwriting prior
/// content. Directory creation is idempotent. A failed write aborts the rest
/// of the run; files already written are left in place.
pub fn generate(document: &SchemaDocument, out_root: &Path) -> Result<GenerationReport> {
    let rendered = render_document(document)?;

    let mut written = Vec::new();
    for file in &rendered.files {
        let target = out_root.join(&file.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| GenerateError::WriteError {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&target, &file.contents).map_err(|source| GenerateError::WriteError {
            path: target.clone(),
            source,
        })?;
        written.push(target);
    }

    Ok(GenerationReport {
        written,
        warnings: rendered.warnings,
    })
}
