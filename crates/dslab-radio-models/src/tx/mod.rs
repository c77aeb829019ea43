//! Radio transmitter models.

pub mod config;
pub mod current;
pub mod current_models;
mod tests;
