use clap::Args;
use ocfpack::errors::PublicationResult;
use ocfpack::{OpenOptions, SaveOptions};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RepackCommand {
    /// The EPUB file to read
    pub input: PathBuf,

    /// The EPUB file to create or overwrite
    pub output: PathBuf,

    /// Deflate compression level (0 stores every entry)
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(0..=9))]
    level: u32,

    /// Skip structural defects of the input instead of failing
    #[arg(long)]
    relaxed: bool,
}

impl RepackCommand {
    pub fn repack(&self) -> PublicationResult<()> {
        let publication = OpenOptions::new()
            .strict(!self.relaxed)
            .open(&self.input)?;

        SaveOptions::new()
            .compression_level(self.level)
            .save(&publication, &self.output)?;

        let resources = publication.resources().len();
        println!(
            "repacked {} rendition(s) and {resources} resource(s) into {}",
            publication.renditions().len(),
            self.output.display(),
        );
        Ok(())
    }
}
