//! Command-line entry point for the stockroom inventory.

pub mod config;
pub mod demo;

pub use config::Config;
pub use demo::run;
