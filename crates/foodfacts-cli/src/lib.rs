//! Library side of the `foodfacts` command-line tool.

pub mod config;
pub mod export;
pub mod logging;
pub mod summary;
pub mod types;
