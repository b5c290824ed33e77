// src/core/models/service_item.rs
use crate::models::common::ItemId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A listed service offering. The only entity type supporting in-place
/// update after creation.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ServiceItem {
    pub id: ItemId,
    pub title: String,
    pub description: String,
}

/// Input for adding or editing a service offering.
#[derive(Clone, Debug, Validate)]
pub struct ServiceInput {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
}

impl ServiceInput {
    /// Trims both fields up front; validation then rejects anything that
    /// was blank or whitespace-only.
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
        }
    }
}
