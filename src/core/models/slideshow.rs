// src/core/models/slideshow.rs
use crate::models::common::{DataRef, ItemId};
use serde::{Deserialize, Serialize};

/// One slide of a carousel. Never mutated in place: slides are created on
/// admin upload and destroyed on admin delete.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SlideItem {
    pub id: ItemId,
    pub src: DataRef,
}
