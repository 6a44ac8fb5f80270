use super::{ensure_capacity, EncodingScheme};
use crate::media::PixelBuffer;
use crate::result::Result;

/// Two payload bits in the two lowest bits of every channel byte.
///
/// The first bit of a pair lands in bit 1, the second in bit 0. An odd
/// trailing bit is padded with a `0`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Lsb2;

impl EncodingScheme for Lsb2 {
    fn capacity_bits(&self, buffer_len: usize) -> usize {
        buffer_len << 1
    }

    fn write(&self, buffer: &mut PixelBuffer, bits: &[bool]) -> Result<()> {
        ensure_capacity(self, buffer.len(), bits.len())?;
        for (i, pair) in bits.chunks(2).enumerate() {
            let high = pair[0] as u8;
            let low = pair.get(1).copied().unwrap_or(false) as u8;
            buffer.set_low_bits(i, (high << 1) | low, 2);
        }

        Ok(())
    }

    fn read(&self, buffer: &PixelBuffer) -> Vec<bool> {
        buffer
            .as_slice()
            .iter()
            .flat_map(|c| [c & 0b10 != 0, c & 0b01 != 0])
            .collect()
    }
}
