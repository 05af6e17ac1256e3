//! Parse and validate `resbind.toml`.

pub mod config;

pub use config::{Config, ConfigError, GeneratorConfig};
