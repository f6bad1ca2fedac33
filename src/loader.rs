//! Documentation JSON loading
//!
//! The tree is loaded exactly once, before any query runs, and passed
//! explicitly to every query function. Nothing here re-reads or watches the
//! file; the index recomputes its views from the in-memory tree.

use std::fs;
use std::path::Path;

use crate::error::{DocdexError, Result};
use crate::schema::Documentation;

/// Load and parse the documentation document from disk
pub fn load_docs(path: &Path) -> Result<Documentation> {
    if !path.exists() {
        return Err(DocdexError::DocsNotFound {
            path: path.display().to_string(),
        });
    }

    let raw = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "read documentation file");

    let docs: Documentation =
        serde_json::from_str(&raw).map_err(|e| DocdexError::MalformedDocs {
            message: e.to_string(),
        })?;

    tracing::debug!(
        version = %docs.version,
        top_level_packages = docs.decl.packages.len(),
        top_level_modules = docs.decl.modules.len(),
        "loaded documentation tree"
    );
    Ok(docs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_minimal_document() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"decl": {{"name": "root", "modules": [{{"name": "m"}}]}}, "version": "1.2.3"}}"#
        )
        .unwrap();

        let docs = load_docs(file.path()).unwrap();
        assert_eq!(docs.decl.name, "root");
        assert_eq!(docs.version, "1.2.3");
        assert_eq!(docs.decl.modules.len(), 1);
    }

    #[test]
    fn missing_file_is_docs_not_found() {
        let err = load_docs(Path::new("/nonexistent/docs.json")).unwrap_err();
        assert!(matches!(err, DocdexError::DocsNotFound { .. }));
    }

    #[test]
    fn invalid_json_is_malformed_docs() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = load_docs(file.path()).unwrap_err();
        assert!(matches!(err, DocdexError::MalformedDocs { .. }));
    }
}
