//! Capacity math for the one-bit-per-pixel scheme.

use image::RgbaImage;

/// Total storage of a carrier in bits, one per pixel.
pub fn capacity_bits(image: &RgbaImage) -> usize {
    (image.width() as usize) * (image.height() as usize)
}

/// Longest message (in characters) that fits together with its terminator.
pub fn max_message_len(image: &RgbaImage) -> usize {
    capacity_bits(image).saturating_sub(u8::BITS as usize) / u8::BITS as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_count_one_bit_per_pixel() {
        let img = RgbaImage::new(10, 10);
        assert_eq!(capacity_bits(&img), 100);
    }

    #[test]
    fn should_reserve_the_terminator_when_sizing_messages() {
        // 100 bits: 11 characters (88 bits) plus the terminator still fit
        let img = RgbaImage::new(10, 10);
        assert_eq!(max_message_len(&img), 11);
    }

    #[test]
    fn should_not_underflow_on_tiny_images() {
        let img = RgbaImage::new(2, 2);
        assert_eq!(max_message_len(&img), 0);
    }
}
