use anyhow::Result;
use clap::Parser;
use gltf_samplegen::cli::{AppContext, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    gltf_samplegen::infra::init_tracing(cli.verbose, cli.quiet);

    // Build a context once, pass everywhere
    let ctx = AppContext {
        quiet: cli.quiet,
        no_color: cli.no_color,
        dry_run: cli.dry_run,
    };

    match cli.command {
        Commands::Generate(args) => gltf_samplegen::generate_run(args, &ctx),
        Commands::List(args) => gltf_samplegen::list_run(args, &ctx),
        Commands::Init(args) => gltf_samplegen::infra::config::init(args, &ctx),
    }
}
