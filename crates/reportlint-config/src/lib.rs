pub mod config;
pub mod error;
pub mod templates;

pub use config::{Config, ConfigLayer, OutputFormat};
pub use error::ConfigError;
