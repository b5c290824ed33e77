// src/core/storage/keys.rs
// Fixed storage keys. One entry per managed collection/config; no two
// managers share a key.

pub const EDITABLE_CONTENT: &str = "logan-design-editable-content";
pub const SITE_SETTINGS: &str = "logan-design-site-settings";
pub const SLIDESHOW: &str = "logan-design-slideshow";
pub const PORTFOLIO_SLIDESHOW: &str = "logan-design-portfolio-slideshow";
pub const ABOUT_SLIDESHOW: &str = "logan-design-about-slideshow";
pub const PORTFOLIO: &str = "logan-design-portfolio";
pub const GALLERY: &str = "logan-design-gallery";
pub const SERVICES: &str = "logan-design-services";
pub const SITE_LOGO: &str = "logan-design-site-logo";
