//! Configuration module for Sumi-Lens
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every table and key has a default, so an empty file
//! (or no file at all) yields a usable configuration.
//!
//! # Example
//!
//! ```no_run
//! use sumi_lens::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("lens.toml")).unwrap();
//! println!("Will probe at most {} links", config.links.max_links);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, DensityConfig, FetchConfig, LinkConfig, SpeedConfig, Strategy,
    DEFAULT_SPEED_ENDPOINT, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate_config;
