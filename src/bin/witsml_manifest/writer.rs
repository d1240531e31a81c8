//! Persisting a finished manifest.

use anyhow::{Context, Result, bail};
use witsml_manifest::ManifestDocument;

use std::fs;
use std::path::{Path, PathBuf};

/// Writes `manifest` as JSON to `output`, returning the absolute path written.
///
/// Refuses to replace an existing file unless `overwrite` is set, and never replaces a directory.
/// Missing parent directories are created.
pub fn write_manifest(
    output: &Path,
    manifest: &ManifestDocument,
    overwrite: bool,
    indent: bool,
) -> Result<PathBuf> {
    let target = std::path::absolute(output)
        .with_context(|| format!("invalid output path `{}`", output.display()))?;

    if target.is_dir() {
        bail!(
            "There is a directory at {}, refusing to overwrite",
            target.display()
        );
    }
    if target.exists() && !overwrite {
        bail!("Manifest file already exists: {}", target.display());
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory `{}`", parent.display()))?;
    }

    let json = if indent {
        manifest.to_json_pretty()
    } else {
        manifest.to_json()
    }
    .context("failed to serialize manifest")?;

    fs::write(&target, json)
        .with_context(|| format!("failed to write manifest to `{}`", target.display()))?;

    Ok(target)
}
