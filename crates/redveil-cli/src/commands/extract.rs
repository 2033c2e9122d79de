use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Recovers the message hidden in an image
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Source image that contains the hidden message
    #[arg(short = 'i', long = "in", value_name = "image source file", required = true)]
    pub image: PathBuf,

    /// Write the recovered message to this file instead of stdout
    #[arg(short = 'o', long = "out", value_name = "text file")]
    pub write_to_file: Option<PathBuf>,
}

impl ExtractArgs {
    pub fn run(self) -> CliResult<()> {
        log::debug!("scanning {} for a hidden message", self.image.display());
        let message = redveil_core::commands::extract(&self.image)?;

        match self.write_to_file {
            Some(path) => {
                fs::write(&path, &message)
                    .map_err(|source| redveil_core::Error::WriteError { source })?;
                println!("Message successfully extracted to {}", path.display());
            }
            None => println!("{message}"),
        }

        Ok(())
    }
}
