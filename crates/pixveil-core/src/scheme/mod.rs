//! The embedding schemes, i.e. where in a [`PixelBuffer`] the payload bits go.
//!
//! | scheme    | bits per channel byte | stride |
//! |-----------|-----------------------|--------|
//! | `lsb1`    | 1                     | 1      |
//! | `lsb2`    | 2                     | 1      |
//! | `spread5` | 1                     | 5      |
//!
//! Nothing in the carrier tells which scheme was used, both sides have to
//! agree on it.

mod lsb1;
mod lsb2;
mod spread5;

use std::fmt;
use std::str::FromStr;

use enum_dispatch::enum_dispatch;

pub use lsb1::Lsb1;
pub use lsb2::Lsb2;
pub use spread5::Spread5;

use crate::media::PixelBuffer;
use crate::result::Result;
use crate::PixveilError;

#[enum_dispatch]
pub trait EncodingScheme {
    /// how many payload bits fit into a buffer of `buffer_len` channel bytes
    fn capacity_bits(&self, buffer_len: usize) -> usize;

    /// Writes `bits` into the low bits of `buffer`.
    ///
    /// Fails with [`PixveilError::CapacityExceeded`] before touching the buffer
    /// when `bits` do not fit.
    fn write(&self, buffer: &mut PixelBuffer, bits: &[bool]) -> Result<()>;

    /// all bits this scheme can see in `buffer`, in visiting order
    fn read(&self, buffer: &PixelBuffer) -> Vec<bool>;
}

/// the closed set of schemes, chosen identically for hiding and unveiling
#[enum_dispatch(EncodingScheme)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Lsb1,
    Lsb2,
    Spread5,
}

impl Default for Scheme {
    fn default() -> Self {
        Self::LSB1
    }
}

impl Scheme {
    pub const LSB1: Scheme = Scheme::Lsb1(Lsb1);
    pub const LSB2: Scheme = Scheme::Lsb2(Lsb2);
    pub const SPREAD5: Scheme = Scheme::Spread5(Spread5);
    pub const ALL: [Scheme; 3] = [Self::LSB1, Self::LSB2, Self::SPREAD5];

    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Lsb1(_) => "lsb1",
            Scheme::Lsb2(_) => "lsb2",
            Scheme::Spread5(_) => "spread5",
        }
    }

    /// file name used for the carrier when no target is given
    pub fn default_output_file_name(&self) -> &'static str {
        match self {
            Scheme::Lsb1(_) => "encoded_image_LSB.png",
            Scheme::Lsb2(_) => "encoded_image_LSB_first_two.png",
            Scheme::Spread5(_) => "encoded_image_F5.png",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = PixveilError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lsb1" | "lsb" => Ok(Self::LSB1),
            "lsb2" | "lsb-first-two" | "lsb_first_two" => Ok(Self::LSB2),
            "spread5" | "f5" => Ok(Self::SPREAD5),
            _ => Err(PixveilError::UnknownScheme(s.to_owned())),
        }
    }
}

/// fails with [`PixveilError::CapacityExceeded`] if `bits_len` bits do not fit
pub fn ensure_capacity<S: EncodingScheme>(
    scheme: &S,
    buffer_len: usize,
    bits_len: usize,
) -> Result<()> {
    let available = scheme.capacity_bits(buffer_len);
    if bits_len > available {
        return Err(PixveilError::CapacityExceeded {
            needed: bits_len,
            available,
        });
    }

    Ok(())
}
