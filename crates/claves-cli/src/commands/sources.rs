// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Locating and reading `.claves` source files.

use camino::{Utf8Path, Utf8PathBuf};
use miette::{Context, IntoDiagnostic, Result};
use std::fs;

use crate::config::Settings;

/// File extension of Claves sources.
pub const SOURCE_EXTENSION: &str = "claves";

/// Resolve a path argument to the list of source files it names.
///
/// A file must carry the `.claves` extension; a directory is searched
/// recursively. Files are returned in sorted order.
pub fn find_source_files(path: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    let mut files = if path.is_file() {
        if path.extension() == Some(SOURCE_EXTENSION) {
            vec![path.to_path_buf()]
        } else {
            miette::bail!("File '{path}' is not a .{SOURCE_EXTENSION} source file");
        }
    } else if path.is_dir() {
        collect_source_files_from_dir(path)?
    } else {
        miette::bail!("Path '{path}' does not exist");
    };

    if files.is_empty() {
        miette::bail!("No .{SOURCE_EXTENSION} source files found in '{path}'");
    }
    files.sort();
    Ok(files)
}

/// Collect all `.claves` source files from a directory tree.
///
/// Returns an error if the directory does not exist or cannot be read.
pub fn collect_source_files_from_dir(dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();
    collect_source_files_recursive(dir, &mut files)?;
    Ok(files)
}

/// Recursively collect all `.claves` files from a directory tree.
///
/// Symlinks are skipped to avoid potential infinite recursion from circular links.
fn collect_source_files_recursive(dir: &Utf8Path, files: &mut Vec<Utf8PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read directory '{dir}'"))?
    {
        let entry = entry.into_diagnostic()?;
        let file_type = entry.file_type().into_diagnostic()?;
        if file_type.is_symlink() {
            continue;
        }
        let entry_path = Utf8PathBuf::from_path_buf(entry.path())
            .map_err(|_| miette::miette!("Non-UTF-8 path"))?;

        if file_type.is_dir() {
            collect_source_files_recursive(&entry_path, files)?;
        } else if file_type.is_file() && entry_path.extension() == Some(SOURCE_EXTENSION) {
            files.push(entry_path);
        }
    }
    Ok(())
}

/// The directory searched for `claves.toml`: the path itself for a
/// directory, its parent for a file.
pub fn project_root(path: &Utf8Path) -> Utf8PathBuf {
    if path.is_dir() {
        path.to_path_buf()
    } else {
        path.parent()
            .filter(|parent| !parent.as_str().is_empty())
            .map_or_else(|| Utf8PathBuf::from("."), Utf8Path::to_path_buf)
    }
}

/// Read a source file and apply the source settings.
pub fn read_source(file: &Utf8Path, settings: &Settings) -> Result<String> {
    let source = fs::read_to_string(file)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read '{file}'"))?;
    Ok(settings.prepare_source(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_path(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap()
    }

    #[test]
    fn test_find_single_file() {
        let temp = TempDir::new().unwrap();
        let file = temp_path(&temp).join("main.claves");
        fs::write(&file, "imprimir(\"x\");").unwrap();

        assert_eq!(find_source_files(&file).unwrap(), vec![file]);
    }

    #[test]
    fn test_reject_wrong_extension() {
        let temp = TempDir::new().unwrap();
        let file = temp_path(&temp).join("main.txt");
        fs::write(&file, "").unwrap();

        let err = find_source_files(&file).unwrap_err();
        assert!(err.to_string().contains("is not a .claves source file"));
    }

    #[test]
    fn test_missing_path() {
        let temp = TempDir::new().unwrap();
        let err = find_source_files(&temp_path(&temp).join("nope")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_collect_recursive_sorted() {
        let temp = TempDir::new().unwrap();
        let root = temp_path(&temp);
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("b.claves"), "").unwrap();
        fs::write(root.join("sub").join("a.claves"), "").unwrap();
        fs::write(root.join("notes.md"), "").unwrap();

        let files = find_source_files(&root).unwrap();
        assert_eq!(
            files,
            vec![root.join("b.claves"), root.join("sub").join("a.claves")]
        );
    }

    #[test]
    fn test_empty_directory() {
        let temp = TempDir::new().unwrap();
        let err = find_source_files(&temp_path(&temp)).unwrap_err();
        assert!(err.to_string().contains("No .claves source files found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_skipped() {
        let temp = TempDir::new().unwrap();
        let root = temp_path(&temp);
        fs::write(root.join("real.claves"), "").unwrap();
        std::os::unix::fs::symlink(&root, root.join("loop")).unwrap();

        let files = collect_source_files_from_dir(&root).unwrap();
        assert_eq!(files, vec![root.join("real.claves")]);
    }

    #[test]
    fn test_project_root() {
        let temp = TempDir::new().unwrap();
        let root = temp_path(&temp);
        let file = root.join("main.claves");
        fs::write(&file, "").unwrap();

        assert_eq!(project_root(&root), root);
        assert_eq!(project_root(&file), root);
        assert_eq!(
            project_root(Utf8Path::new("main.claves")),
            Utf8PathBuf::from(".")
        );
    }
}
