// src/core/lib.rs
//! Client-side state core for a single-page marketing site with an
//! embedded admin panel.
//!
//! Everything the page shows is derived from state held here: slideshow
//! carousels, the service and portfolio grids, the media gallery,
//! edit-in-place text regions, named site settings, and the session-gated
//! admin flows. State persists to a host-provided key-value store and is
//! reseeded from built-in defaults on first run. The host owns the DOM,
//! timers, and file encoding; it drives this crate through [`api::SiteApp`]
//! and renders the view models the managers return.

pub mod api;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;
