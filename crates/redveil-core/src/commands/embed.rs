use std::path::Path;

use crate::result::Result;

/// Hides `message` inside the image at `image` and writes the result to `output`.
pub fn embed(image: &Path, message: &str, output: &Path) -> Result<()> {
    crate::api::embed::prepare()
        .with_image(image)
        .with_message(message)
        .with_output(output)
        .execute()
}
