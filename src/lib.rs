//! **gltf-samplegen** - Generates a Rust test file from a glTF sample-model corpus
//!
//! Walks the corpus, keeps `.gltf`/`.glb` files, derives an identifier per sample
//! and renders one `#[test]` per sample that runs the parser under test over it.

/// Command-line interface with clap integration
pub mod cli;

/// Core generation pipeline - scan, name, render, write
pub mod core {
    /// Corpus traversal and the inclusion policy
    pub mod scan;
    pub use scan::{ALLOWED_EXTENSIONS, EXCLUSION_MARKER, SampleEntry, scan_samples};

    /// Identifier derivation and collision handling
    pub mod naming;
    pub use naming::{GeneratedTestCase, NameAllocator, SampleFormat, build_cases, derive_name};

    /// Preamble and per-sample test block templates
    pub mod render;
    pub use render::{render_case, render_output, render_preamble};

    /// End-to-end generation and the `generate` command
    pub mod generate;
    pub use generate::{GenError, Generation, GeneratorConfig, run as generate_run};

    /// The `list` command
    pub mod list;
    pub use list::run as list_run;
}

/// Infrastructure - Configuration, I/O, walking and logging
pub mod infra {
    /// Configuration management with TOML support
    pub mod config;
    pub use config::{Config, init as config_init, load_config};

    /// Output file I/O
    pub mod io;
    pub use io::{read_existing, write_atomic};

    /// Recursive directory walking without ignore rules
    pub mod walk;
    pub use walk::FileWalker;

    /// tracing subscriber setup
    pub mod logging;
    pub use logging::init_tracing;
}

// Strategic re-exports for clean CLI interface
pub use cli::{AppContext, Cli, Commands};
pub use core::{generate_run, list_run};
pub use infra::{Config, FileWalker, load_config};

// Core types for external consumers
pub use core::{GenError, GeneratedTestCase, GeneratorConfig, SampleEntry, SampleFormat};

/// Environment variable naming the sample-model base directory.
pub const SAMPLES_ENV: &str = "GLTF_SAMPLE_MODELS";
