use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

pub use image::DynamicImage;
use image::GenericImageView;
use log::{debug, error, warn};

use crate::error::PixveilError;
use crate::result::Result;

use super::Persist;

/// file extensions accepted as carrier
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

/// a carrier image for steganography
#[derive(Debug, Clone, PartialEq)]
pub enum Media {
    Image(DynamicImage),
}

impl Media {
    pub fn from_image(img: DynamicImage) -> Self {
        Self::Image(img)
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        let ext = f
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .ok_or(PixveilError::UnsupportedMedia)?;

        if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(PixveilError::UnsupportedMedia);
        }

        let img = image::io::Reader::open(f)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| {
                error!("Error reading image {f:?}: {e}");
                PixveilError::InvalidImageMedia
            })?
            .decode()
            .map_err(|e| {
                error!("Error decoding image {f:?}: {e}");
                PixveilError::InvalidImageMedia
            })?;
        debug!(
            "Loaded {f:?} with {}x{} pixels as {:?}",
            img.width(),
            img.height(),
            img.color()
        );

        Ok(Self::Image(img))
    }

    pub fn image(&self) -> &DynamicImage {
        match self {
            Media::Image(img) => img,
        }
    }

    /// Writes the carrier losslessly as PNG, whatever the target is called.
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        match self {
            Media::Image(i) => i
                .write_to(&mut writer, image::ImageFormat::Png)
                .map_err(|e| {
                    error!("Error saving image: {e}");
                    PixveilError::ImageEncodingError
                }),
        }
    }
}

impl Persist for Media {
    fn save_as(&self, file: &Path) -> Result<()> {
        let is_png = file
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));
        if !is_png {
            warn!("{file:?} does not end with .png, the content is written as PNG anyway");
        }

        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            PixveilError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.save_to_writer(&mut writer)?;
        writer
            .flush()
            .map_err(|source| PixveilError::WriteError { source })
    }
}
