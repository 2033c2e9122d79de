//! Writes a framed message into the channel-0 LSBs of a carrier image.

use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader};
use image::RgbaImage;

use crate::capacity::capacity_bits;
use crate::error::Error;
use crate::frame;
use crate::result::Result;

/// Hides `message` inside a copy of `carrier`.
///
/// The message bits land in the least significant bit of channel 0, one per
/// pixel, walking the grid row by row. Pixels beyond the framed message and
/// all other channels are carried over untouched. The input image is never
/// mutated; on any error it is returned to the caller exactly as it was.
pub fn encode(carrier: &RgbaImage, message: &str) -> Result<RgbaImage> {
    let framed = frame::serialize(message)?;
    let required = framed.len() * u8::BITS as usize;
    let capacity = capacity_bits(carrier);

    if required > capacity {
        return Err(Error::MessageTooLong {
            required,
            capacity,
            max_chars: capacity / u8::BITS as usize,
        });
    }

    let mut output = carrier.clone();
    let mut bits = BitReader::endian(Cursor::new(framed.as_slice()), BigEndian);
    for pixel in output.pixels_mut().take(required) {
        pixel.0[0] = hide_bit(pixel.0[0], bits.read_bit()?);
    }

    Ok(output)
}

/// clear the least significant bit, then or the message bit in
fn hide_bit(channel: u8, bit: bool) -> u8 {
    (channel & (u8::MAX - 1)) | u8::from(bit)
}
