pub mod cli;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_optional_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "customer-contract")]
#[command(about = "Read a customer JSON payload and print its canonical contract form")]
pub struct CliConfig {
    #[arg(long, help = "Payload file to read (defaults to stdin)")]
    pub input: Option<String>,

    #[arg(long, help = "File to write the canonical payload to (defaults to stdout)")]
    pub output: Option<String>,

    #[arg(long, help = "Pretty-print the output")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_optional_path("input", self.input.as_deref())?;
        validate_optional_path("output", self.output.as_deref())?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config = CliConfig::parse_from(["customer-contract"]);
        assert!(config.input.is_none());
        assert!(config.output.is_none());
        assert!(!config.pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_input_path_is_rejected() {
        let config = CliConfig::parse_from(["customer-contract", "--input", "", "--pretty"]);
        assert!(config.pretty);
        let err = config.validate().unwrap_err();
        assert_eq!(err.field(), Some("input"));
    }
}
