//! Filepath: src/core/scan.rs
//! Corpus traversal and the inclusion policy.
//!
//! A file becomes a sample iff its lowercase extension is in `ALLOWED_EXTENSIONS`
//! and its full path does not contain `EXCLUSION_MARKER`. Entries come back
//! sorted by their `/`-normalized relative path.

use std::path::{Component, Path, PathBuf};

use camino::Utf8PathBuf;
use tracing::{debug, info, instrument, warn};

use crate::infra::walk::FileWalker;

/// Extensions (with leading dot, lowercase) that become test cases.
pub const ALLOWED_EXTENSIONS: &[&str] = &[".gltf", ".glb"];

/// Any path containing this substring is skipped, whatever its extension.
pub const EXCLUSION_MARKER: &str = "Unicode❤♻Test";

/// A discovered sample file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleEntry {
    /// Path as found on disk (root joined with the relative part)
    pub path: PathBuf,
    /// Lowercase extension including the dot, e.g. ".glb"
    pub extension: String,
    /// Path relative to the scan root, always `/`-separated
    pub relative: Utf8PathBuf,
    /// Size in bytes at scan time; None when the metadata could not be read
    pub size: Option<u64>,
}

/// Lowercase `.ext` of `path` when it is in the allow-list.
pub fn allowed_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    let ext = format!(".{ext}");
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// True when the full path string contains the exclusion marker.
pub fn is_excluded(path: &Path) -> bool {
    path.to_string_lossy().contains(EXCLUSION_MARKER)
}

/// Join the components of `relative` with `/`, independent of the host separator.
/// Returns None for paths that are not valid UTF-8.
pub fn normalize_relative(relative: &Path) -> Option<Utf8PathBuf> {
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?),
            Component::CurDir => {}
            // strip_prefix never leaves roots or `..` behind
            other => parts.push(other.as_os_str().to_str()?),
        }
    }
    Some(Utf8PathBuf::from(parts.join("/")))
}

/// Byte length of `path`. An unreadable file is logged and reported as unknown,
/// never as zero bytes.
pub fn sample_size(path: &Path) -> Option<u64> {
    match std::fs::metadata(path) {
        Ok(meta) => Some(meta.len()),
        Err(err) => {
            warn!(path = %path.display(), %err, "cannot read sample metadata; size unknown");
            None
        }
    }
}

/// Walk `root` and collect every sample that passes the inclusion policy.
/// A missing root is not an error: it yields no samples.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn scan_samples(root: &Path) -> Vec<SampleEntry> {
    if !root.is_dir() {
        info!("sample root does not exist; no samples");
        return Vec::new();
    }

    let walker = FileWalker::new();
    let mut entries: Vec<SampleEntry> = walker
        .walk_with_filter(root, |p| !is_excluded(p))
        .into_iter()
        .filter_map(|path| {
            let extension = allowed_extension(&path)?;
            let rel = path.strip_prefix(root).unwrap_or(&path);
            let Some(relative) = normalize_relative(rel) else {
                warn!(path = %path.display(), "skipping non UTF-8 sample path");
                return None;
            };
            let size = sample_size(&path);
            Some(SampleEntry {
                path,
                extension,
                relative,
                size,
            })
        })
        .collect();

    // Deterministic order independent of the filesystem
    entries.sort_by(|a, b| a.relative.as_str().cmp(b.relative.as_str()));

    debug!(count = entries.len(), "scan complete");
    entries
}
