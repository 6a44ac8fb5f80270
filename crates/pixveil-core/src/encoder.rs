use image::DynamicImage;
use log::debug;

use crate::bit_codec::bytes_to_bits;
use crate::media::PixelBuffer;
use crate::result::Result;
use crate::scheme::{ensure_capacity, EncodingScheme, Scheme};

/// Hides `message` in a copy of `image`, the original stays untouched.
///
/// ## Example of usage
/// ```rust
/// use image::{DynamicImage, RgbImage};
/// use pixveil_core::{decode, encode, Scheme};
///
/// let carrier = DynamicImage::ImageRgb8(RgbImage::new(16, 16));
/// let secret = encode(&carrier, "Hello World!", Scheme::LSB2)
///     .expect("Cannot hide message");
///
/// assert_eq!(decode(&secret, Scheme::LSB2).unwrap(), "Hello World!");
/// ```
pub fn encode<M: AsRef<[u8]>>(
    image: &DynamicImage,
    message: M,
    scheme: Scheme,
) -> Result<DynamicImage> {
    let buffer = PixelBuffer::flatten(image);
    encode_buffer(buffer, message.as_ref(), scheme)?.unflatten()
}

/// Hides `message` in `buffer`.
///
/// Fails with [`crate::PixveilError::CapacityExceeded`] when the framed
/// message does not fit, the buffer is not modified in that case.
pub fn encode_buffer(
    mut buffer: PixelBuffer,
    message: &[u8],
    scheme: Scheme,
) -> Result<PixelBuffer> {
    let bits = bytes_to_bits(message);
    debug!(
        "Hiding {} bytes as {} bits with {scheme} in {} channel bytes",
        message.len(),
        bits.len(),
        buffer.len()
    );

    ensure_capacity(&scheme, buffer.len(), bits.len())?;
    scheme.write(&mut buffer, &bits)?;

    Ok(buffer)
}
