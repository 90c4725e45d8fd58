//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, OutputFormat};

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "orrery", about = "Generate the orbiting planet catalog")]
pub struct CliArgs {
    /// Seed for the starting angles.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the orbit outline for this radius instead of the catalog.
    #[arg(long, allow_negative_numbers = true)]
    pub outline: Option<f32>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.generator.seed = Some(seed);
        }
        if let Some(format) = args.format {
            self.output.format = format;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs::parse_from(["orrery", "--seed", "7", "--format", "json"]);
        config.apply_cli_overrides(&args);
        assert_eq!(config.generator.seed, Some(7));
        assert_eq!(config.output.format, OutputFormat::Json);
        // Non-overridden fields retain defaults
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        let args = CliArgs::parse_from(["orrery"]);
        config.apply_cli_overrides(&args);
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_outline_and_config_dir() {
        let args = CliArgs::parse_from(["orrery", "--outline", "-3.5", "--config", "/tmp/orr"]);
        assert_eq!(args.outline, Some(-3.5));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/orr")));
    }

    #[test]
    fn test_cli_format_values() {
        let text = CliArgs::parse_from(["orrery", "--format", "text"]);
        assert_eq!(text.format, Some(OutputFormat::Text));
        assert!(CliArgs::try_parse_from(["orrery", "--format", "yaml"]).is_err());
    }
}
