use clap::Args;
use ocfpack::archive::{ArchiveOptions, ArchiveReader, ArchiveResult, CompressionMethod};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct EntriesCommand {
    /// A ZIP archive, such as an EPUB file
    pub archive_path: PathBuf,
}

impl EntriesCommand {
    pub fn list(&self) -> ArchiveResult<()> {
        let archive = ArchiveReader::open(&self.archive_path, ArchiveOptions::new())?;

        println!("{:>10} {:>10} {:>10}  {:<8} name", "offset", "stored", "size", "method");
        for entry in archive.entries() {
            let method = match entry.method() {
                CompressionMethod::Stored => String::from("stored"),
                CompressionMethod::Deflated => String::from("deflated"),
                other => format!("#{}", other.id()),
            };
            println!(
                "{:>10} {:>10} {:>10}  {method:<8} {}",
                entry.header_offset(),
                entry.compressed_size(),
                entry.uncompressed_size(),
                entry.name(),
            );
        }
        println!("{} entries", archive.len());

        Ok(())
    }
}
