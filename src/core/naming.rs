//! Filepath: src/core/naming.rs
//! Test identifiers derived from a sample's containing directory.
//!
//! `Bar Baz/glTF-Binary/model.glb` becomes `Bar_Baz_glTF_Binary`. Names that
//! would not be valid Rust identifiers get a `sample_` prefix, and repeated
//! names get `_2`, `_3`, ... in scan order.

use std::collections::HashSet;
use std::fmt;

use camino::Utf8Path;
use serde::Serialize;
use tracing::{debug, trace};

use crate::core::scan::SampleEntry;

/// Prefix for names that would not start a valid identifier.
const SAFE_PREFIX: &str = "sample_";

/// Basis used for samples sitting directly in the scan root.
const ROOT_NAME: &str = "root";

/// Strict, reserved and edition-2024 keywords.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "try",
    "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Value-namespace items defined by the generated preamble.
pub const RESERVED_NAMES: &[&str] = &["SAMPLES_ENV", "SAMPLES_SUBDIR", "get_path", "read_all_bytes", "main"];

/// How a sample is parsed by the generated test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleFormat {
    /// Binary container with an embedded JSON chunk (`.glb`)
    Container,
    /// JSON document parsed directly (`.gltf`)
    Plain,
}

impl SampleFormat {
    pub fn from_extension(extension: &str) -> Self {
        if extension.eq_ignore_ascii_case(".glb") {
            SampleFormat::Container
        } else {
            SampleFormat::Plain
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleFormat::Container => write!(f, "container"),
            SampleFormat::Plain => write!(f, "plain"),
        }
    }
}

/// One test block to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedTestCase {
    /// Unique identifier used as the test function name
    pub name: String,
    /// `/`-separated path below the corpus root
    pub relative: String,
    pub format: SampleFormat,
    /// Sample had zero bytes when the file was generated
    pub empty: bool,
}

/// Derive the (not yet deduplicated) test name for a relative sample path.
pub fn derive_name(relative: &Utf8Path) -> String {
    let basis = relative
        .parent()
        .map(Utf8Path::as_str)
        .unwrap_or_default();

    if basis.is_empty() {
        return ROOT_NAME.to_string();
    }

    let name: String = basis
        .chars()
        .map(|c| match c {
            '/' | '\\' | ' ' | '-' => '_',
            c if c.is_ascii_alphanumeric() || c == '_' => c,
            _ => '_',
        })
        .collect();

    let starts_with_letter = name.starts_with(|c: char| c.is_ascii_alphabetic());
    if !starts_with_letter || RUST_KEYWORDS.contains(&name.as_str()) {
        format!("{SAFE_PREFIX}{name}")
    } else {
        name
    }
}

/// Hands out unique names; the first claimant keeps the bare name.
#[derive(Debug)]
pub struct NameAllocator {
    used: HashSet<String>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self {
            used: RESERVED_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn assign(&mut self, base: String) -> String {
        if self.used.insert(base.clone()) {
            return base;
        }

        let mut n = 2usize;
        loop {
            let candidate = format!("{base}_{n}");
            if self.used.insert(candidate.clone()) {
                debug!(%base, %candidate, "disambiguated colliding test name");
                return candidate;
            }
            n += 1;
        }
    }
}

impl Default for NameAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn scanned samples into test cases, keeping their order.
pub fn build_cases(entries: &[SampleEntry]) -> Vec<GeneratedTestCase> {
    let mut names = NameAllocator::new();

    entries
        .iter()
        .map(|entry| {
            let case = GeneratedTestCase {
                name: names.assign(derive_name(&entry.relative)),
                relative: entry.relative.as_str().to_string(),
                format: SampleFormat::from_extension(&entry.extension),
                empty: entry.size == Some(0),
            };
            trace!(name = %case.name, path = %entry.path.display(), "assigned test name");
            case
        })
        .collect()
}
