use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Represents a carrier in a format the codec must not touch, for example a JPEG
    #[error("Media format is not supported, only lossless images (png, bmp, tiff) can carry a message")]
    UnsupportedMedia,

    /// Represents an invalid carrier image, for example a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a message that does not fit into the carrier.
    /// `max_chars` is `capacity / 8`, the figure historically reported to users.
    #[error(
        "Message too long: {required} bits needed but the image holds {capacity}. Maximum length for this image is {max_chars} characters"
    )]
    MessageTooLong {
        required: usize,
        capacity: usize,
        max_chars: usize,
    },

    /// Represents a character that does not fit the fixed 8-bit message frame
    #[error("Character {ch:?} cannot be encoded in an 8-bit frame")]
    UnencodableCharacter { ch: char },

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding the output image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
