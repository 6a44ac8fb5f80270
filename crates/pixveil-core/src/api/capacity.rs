use std::path::{Path, PathBuf};

use crate::bit_codec::DELIMITER;
use crate::media::{Media, PixelBuffer};
use crate::scheme::EncodingScheme;
use crate::{PixveilError, Scheme};

pub fn prepare() -> CapacityApi {
    CapacityApi::default()
}

/// how much a carrier can take under one scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub scheme: Scheme,
    pub channel_bytes: usize,
    pub capacity_bits: usize,
    /// longest message in bytes, the delimiter is already subtracted
    pub max_message_bytes: usize,
}

impl Capacity {
    pub fn new(scheme: Scheme, channel_bytes: usize) -> Self {
        let capacity_bits = scheme.capacity_bits(channel_bytes);
        Self {
            scheme,
            channel_bytes,
            capacity_bits,
            max_message_bytes: capacity_bits.saturating_sub(DELIMITER.len()) >> 3,
        }
    }
}

#[derive(Default, Debug)]
pub struct CapacityApi {
    image: Option<PathBuf>,
    scheme: Scheme,
}

impl CapacityApi {
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<Capacity, PixveilError> {
        let Some(image) = self.image else {
            return Err(PixveilError::CarrierNotSet);
        };

        let media = Media::from_file(&image)?;
        let buffer = PixelBuffer::flatten(media.image());

        Ok(Capacity::new(self.scheme, buffer.len()))
    }
}
