//! Knowledge base file discovery.

use std::fs;
use std::path::Path;

use crate::types::{KbError, KbFiles, KbResult};

/// Discovers knowledge base files in a directory.
///
/// Looks for files named `vocabulary`, `rules` and `treatments` with a
/// `.tsv` or `.txt` extension.
pub fn discover_kb_files<P: AsRef<Path>>(path: P) -> KbResult<KbFiles> {
    let path = path.as_ref();

    if !path.is_dir() {
        return Err(KbError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }

    let mut files = KbFiles::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let file_path = entry.path();

        let Some(extension) = file_path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if extension != "tsv" && extension != "txt" {
            continue;
        }

        match file_path.file_stem().and_then(|s| s.to_str()) {
            Some("vocabulary") => files.vocabulary_file = Some(file_path),
            Some("rules") => files.rules_file = Some(file_path),
            Some("treatments") => files.treatments_file = Some(file_path),
            _ => {}
        }
    }

    if !files.has_required_files() {
        return Err(KbError::RequiredFileMissing {
            file_type: files.missing_files().join(", "),
            directory: path.display().to_string(),
        });
    }

    Ok(files)
}
