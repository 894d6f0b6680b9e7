//! Schema file discovery.
//!
//! Pure: produces the sorted list of matching files and their normalized
//! relative paths, with no deletion or subprocess side effects. The action
//! loop in [`crate::runner`] consumes the result.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Input extension of schema files.
pub const SCHEMA_SUFFIX: &str = ".proto";

/// Extension of the generated sibling a schema file produces.
pub const OUTPUT_SUFFIX: &str = ".pb.go";

/// One discovered schema file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFile {
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Path relative to the schema directory, `/`-separated regardless of
    /// host platform — this is the generator's input argument.
    pub rel: String,
}

impl SchemaFile {
    /// The would-be generated output next to the schema file
    /// (`sub/foo.proto` → `sub/foo.pb.go`).
    pub fn output_path(&self) -> PathBuf {
        let raw = self.path.to_string_lossy();
        let stem = raw.strip_suffix(SCHEMA_SUFFIX).unwrap_or(&raw);
        PathBuf::from(format!("{stem}{OUTPUT_SUFFIX}"))
    }
}

/// Recursively discover schema files under `schema_dir`, sorted by relative
/// path so runs are reproducible.
///
/// Unreadable entries are logged and skipped; entries whose relative path
/// cannot be computed are silently skipped. Never fails.
pub fn scan(schema_dir: &Path) -> Vec<SchemaFile> {
    let mut found = Vec::new();
    for entry in WalkDir::new(schema_dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(
                    "skipping unreadable entry under {}: {err}",
                    schema_dir.display()
                );
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(SCHEMA_SUFFIX) {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(schema_dir) else {
            continue;
        };
        found.push(SchemaFile {
            path: entry.path().to_path_buf(),
            rel: normalize_rel(rel),
        });
    }
    found.sort_by(|a, b| a.rel.cmp(&b.rel));
    found
}

/// Join path components with `/`, the separator the generator expects.
fn normalize_rel(rel: &Path) -> String {
    rel.iter()
        .map(|component| component.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("mkdir");
        }
        fs::write(path, b"syntax = \"proto3\";\n").expect("write");
    }

    #[test]
    fn finds_nested_schemas_sorted_by_relative_path() {
        let dir = TempDir::new().expect("dir");
        touch(&dir.path().join("z.proto"));
        touch(&dir.path().join("sub/inner/b.proto"));
        touch(&dir.path().join("sub/a.proto"));
        touch(&dir.path().join("readme.md"));
        touch(&dir.path().join("sub/notes.txt"));

        let rels: Vec<_> = scan(dir.path()).into_iter().map(|s| s.rel).collect();
        assert_eq!(rels, vec!["sub/a.proto", "sub/inner/b.proto", "z.proto"]);
    }

    #[test]
    fn empty_or_schema_free_tree_yields_nothing() {
        let dir = TempDir::new().expect("dir");
        assert!(scan(dir.path()).is_empty());

        touch(&dir.path().join("only/docs.md"));
        assert!(scan(dir.path()).is_empty());
    }

    #[test]
    fn relative_paths_use_forward_slashes() {
        let rel: PathBuf = ["sub", "inner", "foo.proto"].iter().collect();
        assert_eq!(normalize_rel(&rel), "sub/inner/foo.proto");
    }

    #[test]
    fn output_path_swaps_the_suffix_in_place() {
        let schema = SchemaFile {
            path: PathBuf::from("/work/api/sub/foo.proto"),
            rel: "sub/foo.proto".to_string(),
        };
        assert_eq!(schema.output_path(), Path::new("/work/api/sub/foo.pb.go"));
    }
}
