//! Locating the WITSML files a manifest is built from.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

pub fn resolve_input_directory(input: &Path) -> Result<PathBuf> {
    let directory = std::path::absolute(input)
        .with_context(|| format!("invalid input path `{}`", input.display()))?;

    if !directory.exists() {
        bail!("Input directory does not exist: {}", directory.display());
    }
    if !directory.is_dir() {
        bail!("Input path is not a directory: {}", directory.display());
    }
    Ok(directory)
}

fn is_xml_file(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase().ends_with(".xml"))
            .unwrap_or(false)
}

/// Regular `*.xml` files (case-insensitive) directly inside `directory`, sorted by path.
pub fn find_xml_files(directory: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(directory)
        .with_context(|| format!("failed to list `{}`", directory.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to list `{}`", directory.display()))?
            .path();
        if is_xml_file(&path) {
            files.push(path);
        }
    }

    if files.is_empty() {
        bail!("No XML files found in {}", directory.display());
    }

    files.sort();
    Ok(files)
}
