use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shared application context for global flags
#[derive(Clone, Debug)]
pub struct AppContext {
    pub quiet: bool,    // global --quiet
    pub no_color: bool, // global --no-color
    pub dry_run: bool,  // global --dry-run
}

#[derive(Parser)]
#[command(name = "samplegen")]
#[command(about = "Generate one parser test per glTF sample in a sample-model corpus")]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Show what would be done without writing anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the corpus and (re)write the generated test file
    Generate(GenerateArgs),

    /// Print the samples that would become test cases
    List(ListArgs),

    /// Initialize a samplegen.toml config file
    Init(InitArgs),
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Sample-model base directory (the corpus lives under <DIR>/<SUBDIR>)
    #[arg(long, env = "GLTF_SAMPLE_MODELS")]
    pub samples_dir: Option<PathBuf>,

    /// Sub-path segment below the base directory [default: 2.0]
    #[arg(long)]
    pub subdir: Option<String>,

    /// Output file path [default: tests/gltf_samples.rs]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail if the output file is missing or differs instead of writing it
    #[arg(long)]
    pub check: bool,
}

#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Sample-model base directory (the corpus lives under <DIR>/<SUBDIR>)
    #[arg(long, env = "GLTF_SAMPLE_MODELS")]
    pub samples_dir: Option<PathBuf>,

    /// Sub-path segment below the base directory [default: 2.0]
    #[arg(long)]
    pub subdir: Option<String>,

    /// Output format
    #[arg(long, default_value = "text", value_enum)]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
pub struct InitArgs {
    /// Directory to write samplegen.toml into
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}
