use super::{ensure_capacity, EncodingScheme};
use crate::media::PixelBuffer;
use crate::result::Result;

const STRIDE: usize = 5;

/// one payload bit in the least significant bit of every 5th channel byte
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Spread5;

impl EncodingScheme for Spread5 {
    fn capacity_bits(&self, buffer_len: usize) -> usize {
        buffer_len.div_ceil(STRIDE)
    }

    fn write(&self, buffer: &mut PixelBuffer, bits: &[bool]) -> Result<()> {
        ensure_capacity(self, buffer.len(), bits.len())?;
        for (i, bit) in bits.iter().enumerate() {
            buffer.set_low_bits(i * STRIDE, *bit as u8, 1);
        }

        Ok(())
    }

    fn read(&self, buffer: &PixelBuffer) -> Vec<bool> {
        buffer
            .as_slice()
            .iter()
            .step_by(STRIDE)
            .map(|c| c & 1 == 1)
            .collect()
    }
}
