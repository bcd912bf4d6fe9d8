use clap::Args;
use ocfpack::errors::PublicationResult;
use ocfpack::{OpenOptions, Publication};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DebugCommand {
    /// An EPUB file
    pub publication_path: PathBuf,

    /// Display the metadata of every rendition
    #[arg(long)]
    metadata: bool,

    /// Display the manifest of every rendition
    #[arg(long)]
    manifest: bool,

    /// Display the spine of every rendition
    #[arg(long)]
    spine: bool,

    /// Skip structural defects instead of failing
    #[arg(long)]
    relaxed: bool,
}

impl DebugCommand {
    pub fn debug(&self) -> PublicationResult<()> {
        let publication = OpenOptions::new()
            .strict(!self.relaxed)
            .open(&self.publication_path)?;
        self.show_debug(&publication);

        Ok(())
    }

    pub fn has_selected_components(&self) -> bool {
        self.metadata || self.manifest || self.spine
    }

    pub fn show_debug(&self, publication: &Publication) {
        if !self.has_selected_components() {
            println!("{publication:#?}");
            return;
        }

        for rendition in publication.renditions() {
            println!("# {}", rendition.package_location());

            let debug_structs: &[(bool, &dyn std::fmt::Debug)] = &[
                (self.metadata, rendition.metadata()),
                (self.manifest, rendition.manifest()),
                (self.spine, rendition.spine()),
            ];

            for (is_print, debug_struct) in debug_structs {
                if *is_print {
                    println!("{debug_struct:#?}");
                }
            }
        }
    }
}
