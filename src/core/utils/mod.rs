// src/core/utils/mod.rs

pub mod guards;
pub mod rng;
pub mod time;
