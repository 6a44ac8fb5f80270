//! # Pixveil Core API
//!
//! Hides a text message in the low bits of the channel values of a raster
//! image, and unveils it again. Three schemes are available, see
//! [`Scheme`]:
//! - `lsb1` one bit in every channel byte
//! - `lsb2` two bits in every channel byte
//! - `spread5` one bit in every 5th channel byte
//!
//! The message is written MSB first and terminated by the 16 bit delimiter
//! `1111111111111110`. There is no header, so the same scheme has to be used
//! for hiding and unveiling. Output images have to be stored lossless (PNG),
//! JPEG recompression destroys the hidden bits.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use image::{DynamicImage, RgbImage};
//! use pixveil_core::Scheme;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! DynamicImage::ImageRgb8(RgbImage::new(64, 64))
//!     .save(&carrier)
//!     .expect("Failed to write carrier image");
//!
//! pixveil_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_scheme(Scheme::LSB2)
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-a-message-inside.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let msg = pixveil_core::api::unveil::prepare()
//!     .from_secret_file(temp_dir.path().join("image-with-a-message-inside.png"))
//!     .with_scheme(Scheme::LSB2)
//!     .execute()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(msg, "Hello, World!");
//! ```
//!
//! ## Work on pixel data directly
//!
//! ```rust
//! use pixveil_core::media::{ChannelLayout, PixelBuffer, Shape};
//! use pixveil_core::{decode_buffer, encode_buffer, Scheme};
//!
//! let buffer = PixelBuffer::from_raw(vec![0; 1000], Shape::new(1000, 1, ChannelLayout::Luma))
//!     .expect("Shape does not fit");
//! let secret = encode_buffer(buffer, b"hi", Scheme::SPREAD5).expect("Cannot hide message");
//!
//! assert_eq!(decode_buffer(&secret, Scheme::SPREAD5).unwrap(), "hi");
//! ```

#![warn(clippy::redundant_else)]

pub mod bit_codec;
pub mod message;
pub use message::*;

pub mod api;
pub mod commands;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod media;
pub mod result;
pub mod scheme;

pub use crate::decoder::{decode, decode_buffer};
pub use crate::encoder::{encode, encode_buffer};
pub use crate::error::PixveilError;
pub use crate::result::Result;
pub use crate::scheme::{EncodingScheme, Scheme};

#[cfg(test)]
mod test_utils {
    use std::path::{Path, PathBuf};

    use image::{DynamicImage, ImageBuffer, RgbImage, RgbaImage};

    use crate::media::{ChannelLayout, PixelBuffer, Shape};

    /// some deterministic pseudo noise for the channel at flat index `i`
    fn noise(i: usize) -> u8 {
        ((i * 37 + 11) % 251) as u8
    }

    /// a single row gray buffer holding exactly `data`
    pub fn prepare_buffer(data: &[u8]) -> PixelBuffer {
        PixelBuffer::from_raw(
            data.to_vec(),
            Shape::new(data.len() as u32, 1, ChannelLayout::Luma),
        )
        .expect("Buffer does not match its shape")
    }

    pub fn prepare_noise_buffer(len: usize) -> PixelBuffer {
        let data: Vec<u8> = (0..len).map(noise).collect();
        prepare_buffer(&data)
    }

    /// rgb image whose flattened channels follow the same noise as [`prepare_noise_buffer`]
    pub fn prepare_noise_image(width: u32, height: u32) -> RgbImage {
        ImageBuffer::from_fn(width, height, |x, y| {
            let i = (y * width + x) as usize * 3;
            image::Rgb([noise(i), noise(i + 1), noise(i + 2)])
        })
    }

    /// writes a 32x32 rgb noise png as `carrier.png` into `dir`
    pub fn prepare_carrier_file(dir: &Path) -> PathBuf {
        let carrier = dir.join("carrier.png");
        DynamicImage::ImageRgb8(prepare_noise_image(32, 32))
            .save(&carrier)
            .expect("Failed to write carrier image");
        carrier
    }

    /// This image has some traits:
    /// --------------x-------------
    /// | 0,0 -> (0, 1, 2, 3 ) | 1,0 -> (4, 5, 6, 7 ) | ...
    /// | 0,1 -> (20,21,22,23) | 1,1 -> (24,25,26,27) | ...
    /// | 0,2 -> (40,41,42,43) | 1,2 -> (44,45,46,47) | ...
    /// y ...
    pub fn prepare_5x5_image() -> RgbaImage {
        ImageBuffer::from_fn(5, 5, |x, y| {
            let i = (4 * x + 20 * y) as u8;
            image::Rgba([i, i + 1, i + 2, i + 3])
        })
    }
}
