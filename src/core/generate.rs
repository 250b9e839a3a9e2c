//! Filepath: src/core/generate.rs
//! End-to-end generation: resolve configuration, scan, name, render, write.
//!
//! The output file is always rebuilt from scratch. `--check` compares instead
//! of writing, for CI jobs that want to catch a stale checked-in file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::{info, instrument};

use crate::SAMPLES_ENV;
use crate::cli::{AppContext, GenerateArgs};
use crate::core::naming::{GeneratedTestCase, build_cases};
use crate::core::render::render_output;
use crate::core::scan::scan_samples;
use crate::infra::config::load_config;
use crate::infra::io::{read_existing, write_atomic};

/// Domain errors surfaced by generation.
#[derive(Debug, thiserror::Error)]
pub enum GenError
{
    /// Neither `--samples-dir` nor the environment variable was provided
    #[error("sample base directory is not configured: pass --samples-dir or set {0}")]
    MissingBaseDir(&'static str),

    #[error("failed to write {}", .path.display())]
    Write
    {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is out of date; rerun `samplegen generate`", .0.display())]
    Stale(PathBuf),
}

/// Everything generation needs, resolved once up front.
#[derive(Debug, Clone)]
pub struct GeneratorConfig
{
    /// Base directory of the sample-model checkout
    pub base_dir: PathBuf,
    /// Segment between base directory and samples, e.g. "2.0"
    pub subdir: String,
    /// File that receives the generated tests
    pub output: PathBuf,
}

impl GeneratorConfig
{
    /// Directory actually walked for samples.
    pub fn scan_root(&self) -> PathBuf
    {
        self.base_dir
            .join(&self.subdir)
    }
}

/// Rendered file plus the cases it contains.
#[derive(Debug, Clone)]
pub struct Generation
{
    pub cases: Vec<GeneratedTestCase>,
    pub text: String,
}

/// Explicit flag first, then the environment fallback clap already merged in.
/// Empty values count as unset.
pub fn resolve_base_dir(samples_dir: Option<PathBuf>) -> Result<PathBuf, GenError>
{
    samples_dir
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(GenError::MissingBaseDir(SAMPLES_ENV))
}

/// Scan and render without touching the output file.
#[instrument(skip_all, fields(root = %cfg.scan_root().display()))]
pub fn generate(cfg: &GeneratorConfig) -> Generation
{
    let entries = scan_samples(&cfg.scan_root());
    let cases = build_cases(&entries);
    let text = render_output(SAMPLES_ENV, &cfg.subdir, &cases);

    info!(cases = cases.len(), "rendered test file");
    Generation { cases, text }
}

/// Overwrite the output file with the generated text.
pub fn write_output(
    output: &Path,
    generation: &Generation,
) -> Result<(), GenError>
{
    write_atomic(output, generation.text.as_bytes()).map_err(|source| GenError::Write {
        path: output.to_path_buf(),
        source,
    })
}

/// Ok when the file on disk is byte-identical to the generated text.
pub fn check_output(
    output: &Path,
    generation: &Generation,
) -> Result<(), GenError>
{
    match read_existing(output)
    {
        Some(current) if current == generation.text => Ok(()),
        _ => Err(GenError::Stale(output.to_path_buf())),
    }
}

pub fn run(
    args: GenerateArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config = load_config()?;

    // Configuration errors abort before anything is written
    let base_dir = resolve_base_dir(args.samples_dir)?;
    let cfg = GeneratorConfig {
        base_dir,
        subdir: args
            .subdir
            .unwrap_or(config.subdir),
        output: args
            .output
            .unwrap_or(config.output),
    };

    let root = cfg.scan_root();
    if !root.is_dir() && !ctx.quiet
    {
        eprintln!(
            "{} {} does not exist; writing preamble only",
            paint_warning("warning:", ctx),
            root.display()
        );
    }

    let generation = generate(&cfg);

    if args.check
    {
        check_output(&cfg.output, &generation)?;
        if !ctx.quiet
        {
            println!("{} is up to date ({} tests)", cfg.output.display(), generation.cases.len());
        }
        return Ok(());
    }

    if ctx.dry_run
    {
        if !ctx.quiet
        {
            println!("{}", paint_warning("DRY RUN: Would write:", ctx));
            println!("  Output: {}", cfg.output.display());
            println!("  Scan root: {}", display_root(&root));
            println!("  Test cases: {}", generation.cases.len());
        }
        return Ok(());
    }

    write_output(&cfg.output, &generation)
        .with_context(|| format!("Failed to generate {}", cfg.output.display()))?;

    if !ctx.quiet
    {
        let label = if ctx.no_color
        {
            "Wrote".to_string()
        }
        else
        {
            "Wrote".green().to_string()
        };
        println!(
            "{} {} tests to {}",
            label,
            generation.cases.len(),
            cfg.output.display()
        );
    }

    Ok(())
}

fn paint_warning(
    text: &str,
    ctx: &AppContext,
) -> String
{
    if ctx.no_color
    {
        text.to_string()
    }
    else
    {
        text.yellow().to_string()
    }
}

/// Canonical form when the root exists, as given otherwise.
fn display_root(root: &Path) -> String
{
    dunce::canonicalize(root)
        .unwrap_or_else(|_| root.to_path_buf())
        .display()
        .to_string()
}
