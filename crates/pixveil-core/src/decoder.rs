use image::DynamicImage;
use log::debug;

use crate::bit_codec::{bits_to_bytes, strip_delimiter};
use crate::media::PixelBuffer;
use crate::message::Message;
use crate::result::Result;
use crate::scheme::{EncodingScheme, Scheme};

/// unveils the message hidden in `image` with `scheme`
pub fn decode(image: &DynamicImage, scheme: Scheme) -> Result<Message> {
    decode_buffer(&PixelBuffer::flatten(image), scheme)
}

/// Unveils the message hidden in `buffer` with `scheme`.
///
/// Fails with [`crate::PixveilError::NoDelimiterFound`] when no end-of-message
/// marker shows up, and with [`crate::PixveilError::InvalidUtf8`] when the
/// bits in front of it are not UTF-8 text.
pub fn decode_buffer(buffer: &PixelBuffer, scheme: Scheme) -> Result<Message> {
    let bits = scheme.read(buffer);
    let message_bits = strip_delimiter(&bits)?;
    debug!(
        "Found delimiter with {scheme} after {} of {} bits",
        message_bits.len(),
        bits.len()
    );

    bits_to_bytes(message_bits)
}
