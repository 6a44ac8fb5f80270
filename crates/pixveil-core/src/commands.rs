use std::path::{Path, PathBuf};

use crate::api::capacity::Capacity;
use crate::{Message, PixveilError, Scheme};

pub fn hide(
    media: &Path,
    write_to_file: Option<PathBuf>,
    message: String,
    scheme: Scheme,
) -> Result<PathBuf, PixveilError> {
    crate::api::hide::prepare()
        .with_scheme(scheme)
        .with_image(media)
        .use_output(write_to_file)
        .with_message(&message)
        .execute()
}

pub fn unveil(
    secret_media: &Path,
    destination_file: Option<PathBuf>,
    scheme: Scheme,
) -> Result<Message, PixveilError> {
    crate::api::unveil::prepare()
        .with_scheme(scheme)
        .from_secret_file(secret_media)
        .use_output_file(destination_file)
        .execute()
}

pub fn capacity(media: &Path, scheme: Scheme) -> Result<Capacity, PixveilError> {
    crate::api::capacity::prepare()
        .with_scheme(scheme)
        .with_image(media)
        .execute()
}
