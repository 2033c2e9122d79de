use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Hides a text message in a lossless image (PNG, BMP, TIFF)
#[derive(Args, Debug)]
pub struct EmbedArgs {
    /// Carrier image file, used readonly
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// Image with the embedded message will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// The text message that will be hidden
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "message_file"
    )]
    pub message: Option<String>,

    /// Read the message from a text file instead
    #[arg(
        short = 'f',
        long = "message-file",
        value_name = "text file",
        required_unless_present = "message",
        conflicts_with = "message"
    )]
    pub message_file: Option<PathBuf>,
}

impl EmbedArgs {
    pub fn run(self) -> CliResult<()> {
        let message = match (self.message, self.message_file) {
            (Some(message), _) => message,
            (None, Some(path)) => fs::read_to_string(path)
                .map_err(|source| redveil_core::Error::ReadError { source })?,
            (None, None) => return Err(redveil_core::Error::MissingMessage),
        };

        log::debug!(
            "embedding {} characters into {}",
            message.chars().count(),
            self.image.display()
        );
        redveil_core::commands::embed(&self.image, &message, &self.write_to_file)?;

        println!(
            "Message successfully hidden in image and saved as {}",
            self.write_to_file.display()
        );

        Ok(())
    }
}
