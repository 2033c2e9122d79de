use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};
use redveil_core::commands::{embed, extract};
use redveil_core::{max_message_len, Error};
use tempfile::TempDir;

fn carrier_image(width: u32, height: u32) -> RgbaImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        let i = (x * 7 + y * 13) as u8;
        Rgba([i, i.wrapping_add(40), i.wrapping_add(80), 255])
    })
}

fn write_carrier(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
    let path = dir.join(name);
    carrier_image(width, height)
        .save(&path)
        .expect("Failed to write carrier image");
    path
}

#[test]
fn should_embed_and_extract_through_files() {
    let out_dir = TempDir::new().unwrap();
    let carrier = write_carrier(out_dir.path(), "carrier.png", 32, 32);
    let secret = out_dir.path().join("secret.png");

    embed(&carrier, "The crow flies at midnight", &secret).unwrap();

    assert_eq!(extract(&secret).unwrap(), "The crow flies at midnight");
}

#[test]
fn should_embed_and_extract_through_bmp() {
    let out_dir = TempDir::new().unwrap();
    let carrier = write_carrier(out_dir.path(), "carrier.bmp", 32, 32);
    let secret = out_dir.path().join("secret.bmp");

    embed(&carrier, "bitmap works too", &secret).unwrap();

    assert_eq!(extract(&secret).unwrap(), "bitmap works too");
}

#[test]
fn should_fill_a_carrier_to_the_brim() {
    let out_dir = TempDir::new().unwrap();
    let carrier = write_carrier(out_dir.path(), "carrier.png", 9, 9);
    let secret = out_dir.path().join("secret.png");

    // 81 bits hold 9 characters plus the terminator
    let message = "a".repeat(max_message_len(&carrier_image(9, 9)));
    assert_eq!(message.len(), 9);

    embed(&carrier, &message, &secret).unwrap();
    assert_eq!(extract(&secret).unwrap(), message);

    // one character more and the capacity check trips before anything is written
    let too_much = "a".repeat(10);
    assert!(matches!(
        embed(&carrier, &too_much, &secret),
        Err(Error::MessageTooLong { .. })
    ));
}

#[test]
fn should_refuse_a_lossy_output_target() {
    let out_dir = TempDir::new().unwrap();
    let carrier = write_carrier(out_dir.path(), "carrier.png", 16, 16);
    let secret = out_dir.path().join("secret.jpg");

    assert!(matches!(
        embed(&carrier, "hi", &secret),
        Err(Error::UnsupportedMedia)
    ));
    assert!(!secret.exists(), "nothing may be written on failure");
}

#[test]
fn should_extract_something_from_a_plain_image() {
    // a never-embedded image decodes to noise, not to an error
    let out_dir = TempDir::new().unwrap();
    let carrier = write_carrier(out_dir.path(), "carrier.png", 16, 16);

    let first = extract(&carrier).unwrap();
    let second = extract(&carrier).unwrap();
    assert_eq!(first, second, "extraction must be deterministic");
}

#[test]
fn should_report_missing_input_file() {
    let out_dir = TempDir::new().unwrap();
    let missing = out_dir.path().join("nope.png");

    assert!(matches!(extract(&missing), Err(Error::InvalidImageMedia)));
}
