//! # PageCraft CLI
//!
//! Entry point for the `pagecraft` binary.

use clap::Parser;
use pagecraft_cli::Cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pagecraft_cli=info,pagecraft_core=info,pagecraft_export=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    pagecraft_cli::run(cli)
}
