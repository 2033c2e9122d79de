use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::result::Result;
use crate::{encoder, media};

pub fn prepare() -> EmbedApi {
    EmbedApi::default()
}

#[derive(Default, Debug)]
pub struct EmbedApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl EmbedApi {
    /// The text that will be hidden
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    /// The carrier image, used readonly
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Where the image with the embedded message will be stored
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(image) = self.image else {
            return Err(Error::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(Error::TargetNotSet);
        };
        let Some(message) = self.message else {
            return Err(Error::MissingMessage);
        };

        let carrier = media::from_file(&image)?;
        let secret = encoder::encode(&carrier, &message)?;
        media::save_as(&secret, &output)
    }
}
