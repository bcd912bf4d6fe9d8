use clap::Parser;

pub mod command;

/// Inspect and repack EPUB OCF containers.
#[derive(Debug, Parser)]
#[command(name = "ocfpack", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub commands: command::Commands,
}
