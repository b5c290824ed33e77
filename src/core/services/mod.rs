// src/core/services/mod.rs

pub mod content_service;
pub mod gallery_service;
pub mod navigation_service;
pub mod offerings_service;
pub mod portfolio_service;
pub mod quote_service;
pub mod settings_service;
pub mod share_service;
pub mod slideshow_service;
pub mod status;

use crate::error::SiteError;
use validator::Validate;

/// Maps a `validator` failure into the crate error type.
pub(crate) fn validate_request<T: Validate>(req: &T) -> Result<(), SiteError> {
    req.validate()
        .map_err(|e| SiteError::InvalidInput(e.to_string()))
}
