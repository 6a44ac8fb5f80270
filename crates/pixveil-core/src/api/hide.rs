use std::path::{Path, PathBuf};

use log::info;

use crate::media::{Media, Persist};
use crate::{encode, PixveilError, Scheme};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    scheme: Scheme,
}

impl HideApi {
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the output file
    /// If `None` is passed, the default file name of the scheme is used
    pub fn use_output<A: AsRef<Path>>(mut self, output: Option<A>) -> Self {
        self.output = output.map(|o| o.as_ref().to_path_buf());
        self
    }

    /// Hides the message and returns the path of the written PNG
    pub fn execute(self) -> Result<PathBuf, PixveilError> {
        let Some(message) = self.message else {
            return Err(PixveilError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(PixveilError::CarrierNotSet);
        };
        let output = self
            .output
            .unwrap_or_else(|| PathBuf::from(self.scheme.default_output_file_name()));

        let media = Media::from_file(&image)?;
        let encoded = encode(media.image(), message.as_bytes(), self.scheme)?;
        Media::from_image(encoded).save_as(&output)?;
        info!(
            "Hid {} bytes with {} from {image:?} in {output:?}",
            message.len(),
            self.scheme
        );

        Ok(output)
    }
}
