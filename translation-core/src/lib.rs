//! Translation identity model and the line-oriented JSON core protocol.

pub mod config;
pub mod error;
pub mod model;
pub mod protocol;
