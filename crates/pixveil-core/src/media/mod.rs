pub mod pixel_buffer;
mod types;

use std::path::Path;

pub use pixel_buffer::{ChannelLayout, PixelBuffer, Shape};
pub use types::*;

pub trait Persist {
    fn save_as(&self, _: &Path) -> crate::Result<()>;
}
