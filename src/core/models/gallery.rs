// src/core/models/gallery.rs
use crate::models::common::{DataRef, ItemId, MediaType};
use serde::{Deserialize, Serialize};

/// A gallery entry. `media_type` is derived from `file_type` at creation
/// and fixed thereafter.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: ItemId,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub src: DataRef,
    pub title: String,
    /// Full MIME string, e.g. `image/jpeg` or `video/mp4`.
    #[serde(rename = "fileType")]
    pub file_type: String,
}
