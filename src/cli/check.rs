//! Handlers for the `check` diagnostic subcommands.

use crate::adapter::TelegramNotifier;
use crate::cli::{output, CheckCommand};
use crate::config::{Config, Credentials};
use crate::error::{Error, NotifyError, Result};
use crate::port::Notifier;

/// Execute a check subcommand.
pub async fn execute(command: &CheckCommand) -> Result<()> {
    match command {
        CheckCommand::Config(args) => check_config(&args.config),
        CheckCommand::Telegram(args) => check_telegram(&args.config).await,
    }
}

/// Validate the configuration file and the environment credentials.
fn check_config(path: &std::path::Path) -> Result<()> {
    output::section("Configuration Check");

    let config = match Config::load(path) {
        Ok(config) => config,
        Err(e) => {
            output::error(&format!("Configuration invalid: {e}"));
            return Err(e);
        }
    };
    output::key_value("Endpoint", &config.endpoint);
    output::key_value("Poll period", format!("{}s", config.poll_period_secs));
    output::key_value("Log level", &config.logging.level);

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            output::error(&format!("Credentials invalid: {e}"));
            return Err(e);
        }
    };
    output::key_value("API token", output::masked(&credentials.practicum_token));
    output::key_value("Bot token", output::masked(&credentials.telegram_token));
    output::key_value("Chat ID", credentials.chat_id);

    output::ok("Configuration valid");
    Ok(())
}

/// Send a test message through the real notifier.
async fn check_telegram(path: &std::path::Path) -> Result<()> {
    let config = Config::load(path)?;
    let credentials = Credentials::from_env()?;

    output::section("Telegram Check");
    output::key_value("Bot token", output::masked(&credentials.telegram_token));
    output::key_value("Chat ID", credentials.chat_id);

    let notifier = TelegramNotifier::new(&credentials.telegram_token, credentials.chat_id);
    let message = format!(
        "gradewatch test message. Watching {} every {}s.",
        config.endpoint, config.poll_period_secs
    );

    match notifier.send(&message).await {
        Ok(true) => {
            output::ok("Telegram test message sent");
            Ok(())
        }
        Ok(false) => {
            output::error("Telegram API rejected the test message");
            Err(Error::Notify(NotifyError::Rejected))
        }
        Err(e) => {
            output::error(&format!("Delivery failed: {e}"));
            Err(e.into())
        }
    }
}
