use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::info;

use crate::media::Media;
use crate::{decode, Message, PixveilError, Scheme};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    scheme: Scheme,
}

impl UnveilApi {
    /// Use the scheme the message was hidden with
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// The unveiled message is written to this file as well
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    pub fn use_output_file<A: AsRef<Path>>(mut self, output_file: Option<A>) -> Self {
        self.output_file = output_file.map(|o| o.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<Message, PixveilError> {
        let Some(secret_media) = self.secret_media else {
            return Err(PixveilError::CarrierNotSet);
        };

        let media = Media::from_file(&secret_media)?;
        let msg = decode(media.image(), self.scheme)?;
        info!(
            "Unveiled {} bytes with {} from {secret_media:?}",
            msg.len(),
            self.scheme
        );

        if let Some(output_file) = self.output_file {
            let mut target_file =
                File::create(output_file).map_err(|source| PixveilError::WriteError { source })?;

            target_file
                .write_all(msg.as_bytes())
                .map_err(|source| PixveilError::WriteError { source })?;
        }

        Ok(msg)
    }
}
