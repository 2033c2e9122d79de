//! # Redveil Core API
//!
//! Hides a text message in the least significant bits of a lossless image
//! and recovers it again. One bit per pixel goes into color channel 0 (red),
//! walking the grid row by row; each character is spelled out as 8 bits,
//! most significant first, and the stream ends with a full byte of set bits
//! (`0xFF`). That convention is fixed and versionless: any reader that wants
//! the message back has to scan the same channel in the same order.
//!
//! # Usage Examples
//!
//! ## Working on in-memory images
//!
//! ```rust
//! use image::{Rgba, RgbaImage};
//!
//! let carrier = RgbaImage::from_pixel(16, 16, Rgba([120, 60, 30, 255]));
//!
//! let secret = redveil_core::encode(&carrier, "Hello, World!")
//!     .expect("message fits into 16x16");
//!
//! assert_eq!(redveil_core::decode(&secret), "Hello, World!");
//! ```
//!
//! ## Embedding into an image file
//!
//! ```rust,no_run
//! redveil_core::api::embed::prepare()
//!     .with_message("Hello, World!")
//!     .with_image("carrier.png")
//!     .with_output("image-with-a-message-inside.png")
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = redveil_core::api::extract::prepare()
//!     .from_secret_file("image-with-a-message-inside.png")
//!     .execute()
//!     .expect("Failed to extract message from image");
//! ```
//!
//! Decoding cannot fail: an image that never carried a message still decodes
//! to whatever its LSBs happen to spell. Treat unexpected output as noise,
//! not as proof of an embedded message.

pub mod api;
pub mod capacity;
pub mod commands;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frame;
pub mod media;
pub mod result;

pub use crate::capacity::{capacity_bits, max_message_len};
pub use crate::decoder::decode;
pub use crate::encoder::encode;
pub use crate::error::Error;
pub use crate::frame::TERMINATOR;
pub use crate::result::Result;
