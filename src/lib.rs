//! Gradewatch - homework review status watcher.
//!
//! Polls the Practicum homework status API on a fixed interval and relays
//! review status changes to a Telegram chat. One sequential loop, no
//! persistence: state lives for the lifetime of the process.
//!
//! # Modules
//!
//! - [`config`] - Configuration from an optional TOML file plus environment
//!   secrets, and logging initialization
//! - [`domain`] - Review statuses, payload shape validation, poll state
//! - [`error`] - Error types for the crate
//! - [`port`] - Traits the loop talks to: submission source and notifier
//! - [`adapter`] - HTTP and Telegram implementations of the ports
//! - [`app`] - The poll loop itself
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use gradewatch::adapter::{PracticumClient, TelegramNotifier};
//! use gradewatch::app::App;
//! use gradewatch::config::{Config, Credentials};
//!
//! # async fn run() -> gradewatch::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let credentials = Credentials::from_env()?;
//!
//! let source = PracticumClient::new(
//!     config.endpoint.clone(),
//!     credentials.practicum_token.clone(),
//!     &config.http,
//! );
//! let notifier = TelegramNotifier::new(&credentials.telegram_token, credentials.chat_id);
//!
//! App::run(&config, &source, &notifier).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
