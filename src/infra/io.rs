use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

/// Replace `path` with `data` via a same-directory temp file and rename.
/// Parent directories are created as needed.
pub fn write_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;

    match tmp.persist(path) {
        Ok(_) => {}
        Err(e) => {
            // Rename refused (e.g. Windows sharing violation); fall back to copy
            debug!(error = %e.error, "persist failed, copying instead");
            fs::copy(e.file.path(), path)?;
        }
    }

    Ok(())
}

/// Current file contents, or None when it does not exist or is not UTF-8.
pub fn read_existing(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}
