use std::fmt;

use crate::result::Result;

/// The text that is hidden in, or was unveiled from, a carrier image.
///
/// On the wire a message is nothing but its UTF-8 bytes, there is no length
/// prefix and no header. The end is marked by the delimiter appended in
/// [`crate::bit_codec::bytes_to_bits`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    text: String,
}

impl Message {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// fails with [`crate::PixveilError::InvalidUtf8`] if the bytes are no valid UTF-8 text
    pub fn from_utf8(bytes: Vec<u8>) -> Result<Self> {
        Ok(Self {
            text: String::from_utf8(bytes)?,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl AsRef<[u8]> for Message {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<str> for Message {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Message {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
