//! tracing subscriber for the CLI. Logs go to stderr so generated output on
//! stdout (list) stays clean.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level directive for a `-v` count; `--quiet` wins.
pub fn default_directive(
    verbosity: u8,
    quiet: bool,
) -> &'static str
{
    if quiet
    {
        return "error";
    }

    match verbosity
    {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the flag-derived level.
pub fn init_tracing(
    verbosity: u8,
    quiet: bool,
)
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity, quiet)));

    // A second init (tests) is harmless
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
