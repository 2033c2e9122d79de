//! Recovers a message from the channel-0 LSBs of a carrier image.

use bitstream_io::{BigEndian, BitWrite, BitWriter};
use image::RgbaImage;

use crate::frame;

/// Reads the message hidden in `carrier`.
///
/// Scans the full grid row by row, collecting the least significant bit of
/// channel 0 from every pixel, and cuts the resulting byte stream at the
/// first terminator. A grid whose size is not a multiple of 8 bits leaves a
/// trailing incomplete group, which is discarded.
///
/// This never fails: an image that was never embedded still decodes to
/// whatever its LSBs happen to spell, so callers cannot distinguish "no
/// message" from a message that looks like noise.
pub fn decode(carrier: &RgbaImage) -> String {
    let mut packed = BitWriter::endian(Vec::new(), BigEndian);
    for pixel in carrier.pixels() {
        packed
            .write_bit(pixel.0[0] & 1 == 1)
            .expect("writing a bit into a Vec cannot fail");
    }

    // into_writer drops any partial trailing byte
    let bytes = packed.into_writer();
    frame::deserialize(&bytes)
}
