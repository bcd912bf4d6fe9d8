use clap::Parser;
use ocfpack::errors::PublicationResult;
use ocfpack_cli::Cli;
use ocfpack_cli::command::Commands;
use tracing_subscriber::EnvFilter;

fn main() -> PublicationResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.commands {
        Commands::Entries(entries) => entries.list()?,
        Commands::Debug(debug) => debug.debug()?,
        Commands::Repack(repack) => repack.repack()?,
    }

    Ok(())
}
