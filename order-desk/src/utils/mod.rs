//! Utilities
//!
//! - [`logger`] - tracing subscriber setup
//! - [`time`] - order date parsing and formatting
//! - [`validation`] - text limits and field checks used by forms

pub mod logger;
pub mod time;
pub mod validation;

pub use logger::init_logger_with_file;
