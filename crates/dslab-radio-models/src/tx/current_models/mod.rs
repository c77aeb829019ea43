//! A collection of transmit current models.

pub mod constant;
pub mod linear;
pub mod piecewise;
