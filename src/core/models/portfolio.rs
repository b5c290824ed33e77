// src/core/models/portfolio.rs
use crate::models::common::{DataRef, ItemId};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PortfolioItem {
    pub id: ItemId,
    pub title: String,
    #[serde(rename = "imageSrc")]
    pub image_src: DataRef,
}
