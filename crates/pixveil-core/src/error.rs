use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixveilError {
    /// Represents a payload that does not fit into the carrier under the chosen scheme
    #[error(
        "Capacity Error: the payload needs {needed} bits but the carrier only offers {available} bits with the chosen scheme"
    )]
    CapacityExceeded { needed: usize, available: usize },

    /// Represents an unveil that scanned the whole carrier without finding the end-of-message delimiter.
    /// Usually caused by a wrong scheme, a recompressed image or an image that never carried a message
    #[error("No message delimiter found")]
    NoDelimiterFound,

    /// Represents the bytes in front of the delimiter not being valid UTF-8 text
    #[error("Invalid text data found inside a message")]
    InvalidUtf8(#[from] FromUtf8Error),

    /// Represents an unsupported carrier media. For example, a GIF or a WAV file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents raw pixel data whose length does not fit the image shape
    #[error("Pixel buffer holds {actual} bytes but the image shape requires {expected}")]
    InvalidPixelBuffer { expected: usize, actual: usize },

    /// Represents a scheme name that is none of lsb1, lsb2 or spread5
    #[error("Unknown encoding scheme: {0}")]
    UnknownScheme(String),

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
