//! Handler for the `run` command.

use tokio::signal;
use tracing::{error, info};

use crate::adapter::{PracticumClient, TelegramNotifier};
use crate::app::App;
use crate::cli::RunArgs;
use crate::config::{Config, Credentials};
use crate::error::Result;

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;

    // Apply CLI overrides
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
    if let Some(period) = args.poll_period {
        config.poll_period_secs = period;
    }

    config.init_logging();

    // The one fatal, non-retried condition in the system.
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!(error = %e, "Required configuration is missing, stopping");
            std::process::exit(1);
        }
    };

    info!(endpoint = %config.endpoint, "gradewatch starting");

    let source = PracticumClient::new(
        config.endpoint.clone(),
        credentials.practicum_token.clone(),
        &config.http,
    );
    let notifier = TelegramNotifier::new(&credentials.telegram_token, credentials.chat_id);

    tokio::select! {
        result = App::run(&config, &source, &notifier) => {
            if let Err(e) = result {
                error!(error = %e, "Fatal error");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("gradewatch stopped");
    Ok(())
}
