use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::{AppContext, InitArgs};

/// Config file names looked up in the working directory, first match wins
const CONFIG_FILES: [&str; 4] = [
    "samplegen.toml",
    "samplegen.yaml",
    "samplegen.json",
    ".samplegen.toml",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config
{
    /// Generated test file, relative to the working directory
    pub output: PathBuf,

    /// Sub-path segment joined onto the sample base directory
    pub subdir: String,
}

impl Default for Config
{
    fn default() -> Self
    {
        Self {
            output: PathBuf::from("tests/gltf_samples.rs"),
            subdir: "2.0".to_string(),
        }
    }
}

/// Load configuration relative to the current directory.
pub fn load_config() -> Result<Config>
{
    load_config_from(Path::new("."))
}

/// Defaults < first config file found in `dir` < `SAMPLEGEN_*` environment.
pub fn load_config_from(dir: &Path) -> Result<Config>
{
    let defaults = Config::default();
    let mut builder = config::Config::builder()
        .set_default(
            "output",
            defaults
                .output
                .to_string_lossy()
                .into_owned(),
        )?
        .set_default("subdir", defaults.subdir)?;

    for name in &CONFIG_FILES
    {
        let path = dir.join(name);
        if path.exists()
        {
            builder = builder.add_source(config::File::from(path));
            break;
        }
    }

    builder = builder.add_source(config::Environment::with_prefix("SAMPLEGEN"));

    let cfg = builder
        .build()
        .context("Failed to load configuration")?;
    let parsed: Config = cfg
        .try_deserialize()
        .context("Failed to parse configuration")?;

    Ok(parsed)
}

pub fn init(
    args: InitArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config_path = args
        .path
        .join("samplegen.toml");

    if config_path.exists() && !args.force
    {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let toml_string =
        toml::to_string_pretty(&Config::default()).context("Failed to serialize default config")?;

    if ctx.dry_run
    {
        if !ctx.quiet
        {
            println!("Would write {}:\n{}", config_path.display(), toml_string);
        }
        return Ok(());
    }

    std::fs::write(&config_path, toml_string).context("Failed to write config file")?;

    if !ctx.quiet
    {
        println!("Created config file at {}", config_path.display());
    }
    Ok(())
}
