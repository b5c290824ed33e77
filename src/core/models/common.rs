// src/core/models/common.rs
use crate::error::SiteError;
use serde::{Deserialize, Serialize};

/// Opaque item identifier, unique within the list that owns it.
pub type ItemId = String;

/// Milliseconds since the Unix epoch.
pub type TimestampMs = u64;

/// Encoded reference to asset bytes: either a `data:` URL produced by a file
/// read, or a plain remote URL (the built-in defaults use the latter).
pub type DataRef = String;

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    /// Derives the media type from a MIME string. Anything that is not an
    /// `image/*` or `video/*` type is unsupported.
    pub fn from_mime(mime: &str) -> Option<Self> {
        if mime.starts_with("image/") {
            Some(Self::Image)
        } else if mime.starts_with("video/") {
            Some(Self::Video)
        } else {
            None
        }
    }
}

/// A file selected by the admin, as handed over by the host.
#[derive(Clone, Debug)]
pub struct FileUpload {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub bytes: Vec<u8>,
}

/// File-to-data-reference encoding, supplied by the host. The encoding
/// itself is asynchronous on real hosts; managers only ever see the
/// delivered outcome.
pub trait FileReader {
    fn read_as_data_url(&self, file: &FileUpload) -> Result<DataRef, SiteError>;
}
