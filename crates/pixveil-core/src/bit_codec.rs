//! Conversion between message bytes and the framed bit stream that is
//! embedded into a carrier.
//!
//! Bits are ordered most significant bit first within each byte, bytes in
//! message order. The stream ends with [`DELIMITER`]. Message content is not
//! escaped, so raw bytes that contain the delimiter pattern get cut short on
//! decoding. Valid UTF-8 text can never contain 15 consecutive one bits,
//! which makes the delimiter unambiguous for text messages.

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use std::iter;

use crate::message::Message;
use crate::result::Result;
use crate::PixveilError;

/// `1111111111111110`, marks the end of the message bits
pub const DELIMITER: [bool; 16] = [
    true, true, true, true, true, true, true, true, true, true, true, true, true, true, true,
    false,
];

/// turns message bytes into the framed bit stream, delimiter included
pub fn bytes_to_bits(message: &[u8]) -> Vec<bool> {
    let mut reader = BitReader::endian(message, BigEndian);
    let mut bits = Vec::with_capacity((message.len() << 3) + DELIMITER.len());
    bits.extend(iter::from_fn(|| reader.read_bit().ok()));
    bits.extend_from_slice(&DELIMITER);

    bits
}

/// groups bits into big endian bytes and validates them as UTF-8 text.
///
/// A trailing group of less than 8 bits is dropped, not zero padded.
pub fn bits_to_bytes(bits: &[bool]) -> Result<Message> {
    let mut bytes = Vec::with_capacity(bits.len() >> 3);
    {
        let mut writer = BitWriter::endian(&mut bytes, BigEndian);
        for bit in bits.chunks_exact(8).flatten() {
            writer.write_bit(*bit)?;
        }
    }

    Message::from_utf8(bytes)
}

/// position of the first delimiter occurrence in `bits`
pub fn find_delimiter(bits: &[bool]) -> Option<usize> {
    bits.windows(DELIMITER.len())
        .position(|window| window == &DELIMITER[..])
}

/// returns the message bits in front of the first delimiter
pub fn strip_delimiter(bits: &[bool]) -> Result<&[bool]> {
    find_delimiter(bits)
        .map(|end| &bits[..end])
        .ok_or(PixveilError::NoDelimiterFound)
}
