use image::{ColorType, DynamicImage, GenericImageView, ImageBuffer};
use log::warn;

use crate::error::PixveilError;
use crate::result::Result;

/// channel layout of one pixel in a [`PixelBuffer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    Luma,
    LumaAlpha,
    Rgb,
    Rgba,
}

impl ChannelLayout {
    pub fn channels(self) -> usize {
        match self {
            ChannelLayout::Luma => 1,
            ChannelLayout::LumaAlpha => 2,
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }
}

/// the dimensions a flattened buffer came from, needed to restore the image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub width: u32,
    pub height: u32,
    pub layout: ChannelLayout,
}

impl Shape {
    pub fn new(width: u32, height: u32, layout: ChannelLayout) -> Self {
        Self {
            width,
            height,
            layout,
        }
    }

    /// number of channel bytes an image of this shape holds
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize * self.layout.channels()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Flat view over the 8 bit channel values of an image.
///
/// The order is row-major with interleaved channels, i.e.
/// `(y * width + x) * channels + c`, which is exactly the raw layout of
/// `image::ImageBuffer`. Encoding and decoding rely on the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    shape: Shape,
}

impl PixelBuffer {
    /// Copies the channel values of `image` into a new buffer.
    ///
    /// 8 bit luma, luma alpha, rgb and rgba images keep their layout,
    /// everything else is converted to 8 bit rgba.
    pub fn flatten(image: &DynamicImage) -> Self {
        let (width, height) = image.dimensions();
        let (data, layout) = match image {
            DynamicImage::ImageLuma8(i) => (i.as_raw().clone(), ChannelLayout::Luma),
            DynamicImage::ImageLumaA8(i) => (i.as_raw().clone(), ChannelLayout::LumaAlpha),
            DynamicImage::ImageRgb8(i) => (i.as_raw().clone(), ChannelLayout::Rgb),
            DynamicImage::ImageRgba8(i) => (i.as_raw().clone(), ChannelLayout::Rgba),
            other => {
                warn!(
                    "Image color type {:?} is converted to {:?}",
                    other.color(),
                    ColorType::Rgba8
                );
                (other.to_rgba8().into_raw(), ChannelLayout::Rgba)
            }
        };

        Self {
            data,
            shape: Shape::new(width, height, layout),
        }
    }

    /// wraps raw channel values, fails if `data` does not match `shape`
    pub fn from_raw(data: Vec<u8>, shape: Shape) -> Result<Self> {
        if data.len() != shape.len() {
            return Err(PixveilError::InvalidPixelBuffer {
                expected: shape.len(),
                actual: data.len(),
            });
        }

        Ok(Self { data, shape })
    }

    /// restores an image of the original shape from the buffer
    pub fn unflatten(self) -> Result<DynamicImage> {
        let Shape {
            width,
            height,
            layout,
        } = self.shape;
        let expected = self.shape.len();
        let actual = self.data.len();

        let image = match layout {
            ChannelLayout::Luma => {
                ImageBuffer::from_raw(width, height, self.data).map(DynamicImage::ImageLuma8)
            }
            ChannelLayout::LumaAlpha => {
                ImageBuffer::from_raw(width, height, self.data).map(DynamicImage::ImageLumaA8)
            }
            ChannelLayout::Rgb => {
                ImageBuffer::from_raw(width, height, self.data).map(DynamicImage::ImageRgb8)
            }
            ChannelLayout::Rgba => {
                ImageBuffer::from_raw(width, height, self.data).map(DynamicImage::ImageRgba8)
            }
        };

        image.ok_or(PixveilError::InvalidPixelBuffer { expected, actual })
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// the lowest `width` bits of the channel value at `index`
    #[inline(always)]
    pub fn low_bits(&self, index: usize, width: u8) -> u8 {
        self.data[index] & low_mask(width)
    }

    /// replaces the lowest `width` bits at `index`, all higher bits stay untouched
    #[inline(always)]
    pub fn set_low_bits(&mut self, index: usize, value: u8, width: u8) {
        let mask = low_mask(width);
        let channel = &mut self.data[index];
        *channel = (*channel & !mask) | (value & mask);
    }
}

#[inline(always)]
fn low_mask(width: u8) -> u8 {
    debug_assert!((1..8).contains(&width));
    (1 << width) - 1
}
