use clap::Parser;
use customer_contract::config::cli::normalize_file;
use customer_contract::utils::logger::{self, LogFormat};
use customer_contract::utils::validation::Validate;
use customer_contract::{CliConfig, ErrorCategory};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let format = if config.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, config.verbose);

    tracing::info!("Starting customer-contract CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match normalize_file(config.input.as_deref(), config.output.as_deref(), config.pretty) {
        Ok(_) => {
            tracing::info!("Payload normalized");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Normalization failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = match e.category() {
                ErrorCategory::Contract => 2,
                ErrorCategory::Io | ErrorCategory::Config => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
