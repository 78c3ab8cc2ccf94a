//! Utility modules for Renamarion

pub mod timing;

pub use timing::{format_duration, Timer};
