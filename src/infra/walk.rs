//! Filepath: src/infra/walk.rs
//! Recursive file walker for sample corpora.
//! - No ignore files and no hidden-file policy: every entry under the root is visited
//! - Directory symlinks are not descended; a symlink still counts as a file
//!   when it resolves to one
//! - Children are visited in file-name order
//!
//! Backed by ripgrep's `ignore` crate with its standard filters switched off.

use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};
use tracing::{trace, warn};

/// Walker over every regular file below a root directory.
#[derive(Debug, Default)]
pub struct FileWalker;

impl FileWalker
{
    pub fn new() -> Self
    {
        Self
    }

    /// Internal: construct a configured WalkBuilder for `root`.
    fn build_walk(
        &self,
        root: &Path,
    ) -> WalkBuilder
    {
        let mut b = WalkBuilder::new(root);

        // .gitignore, .ignore, hidden and parent rules all off
        b.standard_filters(false);
        b.follow_links(false);
        b.sort_by_file_name(|a, b| a.cmp(b));

        b
    }

    /// Traverse files under `root`. Unreadable entries are logged and skipped.
    pub fn walk_files<P: AsRef<Path>>(
        &self,
        root: P,
    ) -> Vec<PathBuf>
    {
        let root_path = root.as_ref();

        self.build_walk(root_path)
            .build()
            .filter_map(|res| match res
            {
                Ok(entry) => Some(entry),
                Err(err) =>
                {
                    warn!(%err, "skipping unreadable entry");
                    None
                }
            })
            .filter(resolves_to_file)
            .map(|entry| entry.into_path())
            .collect()
    }

    /// Traverse and then apply a caller-provided filter predicate.
    pub fn walk_with_filter<P, F>(
        &self,
        root: P,
        filter: F,
    ) -> Vec<PathBuf>
    where
        P: AsRef<Path>,
        F: Fn(&Path) -> bool,
    {
        self.walk_files(root)
            .into_iter()
            .filter(|p| {
                let keep = filter(p);
                if !keep
                {
                    trace!(path = %p.display(), "filtered out");
                }
                keep
            })
            .collect()
    }
}

/// Regular files, plus symlinks whose target is a regular file.
fn resolves_to_file(entry: &DirEntry) -> bool
{
    match entry.file_type()
    {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => entry
            .path()
            .is_file(),
        _ => false,
    }
}
