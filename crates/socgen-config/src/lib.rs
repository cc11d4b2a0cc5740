//! Canonical configuration model for the SoC generator.
//!
//! One `soc.toml` file drives every generated artifact. This crate owns the
//! typed model, TOML parsing and serialization, structural validation, and
//! the values derived from the raw parameters (end-of-memory address, clock
//! period). Rendering the artifacts themselves lives in `socgen-render`.

pub mod config;
pub mod derive;
pub mod error;
pub mod parse;
pub mod validate;

pub use config::{BoardConfig, CacheConfig, MemoryConfig, SocConfig, TimingConfig};
pub use derive::{derive, DeriveError, DerivedValues};
pub use error::{ConfigError, Result};
pub use parse::{
    config_to_toml, find_and_load, generate_template, load_config, parse_config_toml,
    CONFIG_FILE_NAME,
};
pub use validate::{validate_config, ValidationIssue};
