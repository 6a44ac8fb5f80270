use super::{ensure_capacity, EncodingScheme};
use crate::media::PixelBuffer;
use crate::result::Result;

/// one payload bit in the least significant bit of every channel byte
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Lsb1;

impl EncodingScheme for Lsb1 {
    fn capacity_bits(&self, buffer_len: usize) -> usize {
        buffer_len
    }

    fn write(&self, buffer: &mut PixelBuffer, bits: &[bool]) -> Result<()> {
        ensure_capacity(self, buffer.len(), bits.len())?;
        for (i, bit) in bits.iter().enumerate() {
            buffer.set_low_bits(i, *bit as u8, 1);
        }

        Ok(())
    }

    fn read(&self, buffer: &PixelBuffer) -> Vec<bool> {
        buffer.as_slice().iter().map(|c| c & 1 == 1).collect()
    }
}
