//! CLI library components for the phone hasher.

pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
