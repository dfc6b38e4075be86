mod args_parser;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args_parser::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = efpmd::parse_config(&args.infile)
        .with_context(|| format!("failed to load input file '{}'", args.infile))?;
    print!("{}", config);
    Ok(())
}
