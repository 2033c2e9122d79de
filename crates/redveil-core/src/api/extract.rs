use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::result::Result;
use crate::{decoder, media};

pub fn prepare() -> ExtractApi {
    ExtractApi::default()
}

#[derive(Default, Debug)]
pub struct ExtractApi {
    secret_image: Option<PathBuf>,
}

impl ExtractApi {
    /// The image that carries the hidden message
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Runs the extraction and returns the recovered message
    pub fn execute(self) -> Result<String> {
        let Some(secret_image) = self.secret_image else {
            return Err(Error::CarrierNotSet);
        };

        let carrier = media::from_file(&secret_image)?;
        Ok(decoder::decode(&carrier))
    }
}
