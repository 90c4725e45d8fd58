//! Configuration for the orrery tools.
//!
//! Settings persist to disk as RON, can be overridden from the command line via
//! clap, and tolerate missing or unknown fields so older files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, GeneratorConfig, OutputConfig, OutputFormat};
pub use error::ConfigError;
