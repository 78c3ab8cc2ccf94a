//! Renamarion Library
//!
//! This crate scans a directory tree for file and directory names that break
//! a set of naming rules (forbidden characters, trailing separators), groups
//! the offenders by the rules they break, and renames them to sanitized names.

pub mod actions;
pub mod cli;
pub mod error;
pub mod inventory;
pub mod rules;
pub mod scanner;
pub mod utils;

pub use error::RenamarionError;
