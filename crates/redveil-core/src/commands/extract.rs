use std::path::Path;

use crate::result::Result;

/// Recovers the message hidden in the image at `image`.
pub fn extract(image: &Path) -> Result<String> {
    crate::api::extract::prepare().from_secret_file(image).execute()
}
