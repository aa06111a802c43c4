//! Content file discovery and slug derivation.

use std::path::{Path, PathBuf};

use crate::error::BatchError;

/// Recursively collect files ending in `.{extension}` under `root`.
///
/// Directories are walked depth-first with entries in name order; entries
/// whose name starts with `.` are skipped.
///
/// # Errors
///
/// Returns [`BatchError::Discover`] if any directory cannot be read.
pub fn discover_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>, BatchError> {
    let suffix = format!(".{extension}");
    let mut files = Vec::new();
    walk(root, &suffix, &mut files)?;
    Ok(files)
}

fn walk(dir: &Path, suffix: &str, files: &mut Vec<PathBuf>) -> Result<(), BatchError> {
    let discover_error = |source| BatchError::Discover {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = std::fs::read_dir(dir)
        .map_err(discover_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(discover_error)?;
    entries.sort_by_key(std::fs::DirEntry::file_name);

    for entry in entries {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with('.') {
            continue;
        }
        let file_type = entry.file_type().map_err(discover_error)?;
        if file_type.is_dir() {
            walk(&entry.path(), suffix, files)?;
        } else if name.ends_with(suffix) {
            files.push(entry.path());
        }
    }
    Ok(())
}

/// Derive a page slug from a content file path.
///
/// The slug is the path relative to `root` without extension, with a
/// leading `/`. A file whose stem is `index_name` stands for its directory:
/// `guide/index.mdx` is `/guide`, and a root index is `/`.
#[must_use]
pub fn derive_slug(root: &Path, file: &Path, index_name: &str) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);
    let dir: Vec<String> = relative
        .parent()
        .map(|parent| {
            parent
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    let stem = relative
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut segments = dir;
    if stem != index_name {
        segments.push(stem);
    }
    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_derive_slug() {
        let root = Path::new("/site/contents/docs");
        assert_eq!(
            derive_slug(root, &root.join("guide/index.mdx"), "index"),
            "/guide"
        );
        assert_eq!(
            derive_slug(root, &root.join("guide/setup.mdx"), "index"),
            "/guide/setup"
        );
        assert_eq!(derive_slug(root, &root.join("index.mdx"), "index"), "/");
        assert_eq!(derive_slug(root, &root.join("about.mdx"), "index"), "/about");
        assert_eq!(
            derive_slug(root, &root.join("a/b/c/index.mdx"), "index"),
            "/a/b/c"
        );
    }

    #[test]
    fn test_derive_slug_custom_index_name() {
        let root = Path::new("/docs");
        assert_eq!(
            derive_slug(root, &root.join("guide/README.md"), "README"),
            "/guide"
        );
        assert_eq!(
            derive_slug(root, &root.join("guide/index.md"), "README"),
            "/guide/index"
        );
    }

    #[test]
    fn test_discover_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for file in [
            "index.mdx",
            "b/index.mdx",
            "a/setup.mdx",
            "a/index.mdx",
            "a/notes.md",
            ".drafts/index.mdx",
            "a/.hidden.mdx",
        ] {
            let path = root.join(file);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, "x").unwrap();
        }

        let files = discover_files(root, "mdx").unwrap();
        let relative: Vec<_> = files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            relative,
            vec!["a/index.mdx", "a/setup.mdx", "b/index.mdx", "index.mdx"]
        );
    }

    #[test]
    fn test_discover_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let result = discover_files(&dir.path().join("missing"), "mdx");
        assert!(matches!(result, Err(BatchError::Discover { .. })));
    }
}
