use clap::Subcommand;

mod debug;
mod entries;
mod repack;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the entries of a ZIP archive in storage order.
    Entries(entries::EntriesCommand),
    /// Print the debugged contents of an ocfpack::Publication.
    Debug(debug::DebugCommand),
    /// Open a publication and save it into a new container.
    Repack(repack::RepackCommand),
}
