//! Core module - configuration
//!
//! - [`Config`] - environment-driven settings (logging, tax, paging)

pub mod config;

pub use config::Config;
