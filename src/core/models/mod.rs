// src/core/models/mod.rs

pub mod common;
pub mod editable;
pub mod gallery;
pub mod portfolio;
pub mod service_item;
pub mod session;
pub mod settings;
pub mod slideshow;

// Re-export common types for easier access
pub use common::*;
