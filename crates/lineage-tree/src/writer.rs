//! JSON artifact output.
//!
//! The artifact uses four-space indentation and leaves non-ASCII characters
//! unescaped.

use std::fs;
use std::path::Path;

use lineage_model::FamilyTree;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{BuildError, Result};

const INDENT: &[u8] = b"    ";

/// Serializes the tree as the artifact text.
pub fn to_json_string(tree: &FamilyTree) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    tree.serialize(&mut serializer)?;
    // serde_json only ever emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Writes the artifact to `path`, replacing any previous file.
pub fn write_json(path: &Path, tree: &FamilyTree) -> Result<()> {
    let text = to_json_string(tree)?;
    fs::write(path, text).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote family tree artifact");
    Ok(())
}
