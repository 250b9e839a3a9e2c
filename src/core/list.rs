//! `samplegen list`: show which samples would become tests, under which names.

use std::io::Write;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::{AppContext, ListArgs, ListFormat};
use crate::core::generate::resolve_base_dir;
use crate::core::naming::{GeneratedTestCase, build_cases};
use crate::core::scan::scan_samples;
use crate::infra::config::load_config;

#[derive(Debug, Serialize)]
struct Listing<'a> {
    root: String,
    count: usize,
    cases: &'a [GeneratedTestCase],
}

pub fn run(args: ListArgs, ctx: &AppContext) -> Result<()> {
    let config = load_config()?;
    let base_dir = resolve_base_dir(args.samples_dir)?;
    let root = base_dir.join(args.subdir.unwrap_or(config.subdir));

    let cases = build_cases(&scan_samples(&root));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.format {
        ListFormat::Json => {
            let listing = Listing {
                root: root.display().to_string(),
                count: cases.len(),
                cases: &cases,
            };
            serde_json::to_writer_pretty(&mut out, &listing).context("serialize listing")?;
            writeln!(out)?;
        }
        ListFormat::Text => {
            for case in &cases {
                let name = if ctx.no_color {
                    case.name.clone()
                } else {
                    case.name.cyan().to_string()
                };
                let flag = if case.empty { "  (empty)" } else { "" };
                writeln!(out, "{name}\t{}\t{}{flag}", case.format, case.relative)?;
            }
            if !ctx.quiet {
                writeln!(out, "{} samples under {}", cases.len(), root.display())?;
            }
        }
    }

    Ok(())
}
