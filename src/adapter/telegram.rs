//! Telegram delivery for status notifications.
//!
//! Send-only: no dispatcher, no command handling. One bot, one chat.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::RequestError;
use tracing::{debug, error};

use crate::error::NotifyError;
use crate::port::Notifier;

/// Notifier that sends plain-text messages to a single chat.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(token: &str, chat_id: i64) -> Self {
        Self {
            bot: Bot::new(token),
            chat_id: ChatId(chat_id),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<bool, NotifyError> {
        match self.bot.send_message(self.chat_id, text).await {
            Ok(_) => {
                debug!(chat_id = self.chat_id.0, text, "Sent Telegram message");
                Ok(true)
            }
            // The Bot API rejecting the message is the expected failure
            // class: report an unsuccessful send and let the caller retry
            // on its next cycle.
            Err(err @ RequestError::Api(_)) => {
                error!(error = %err, "Telegram API rejected the message");
                Ok(false)
            }
            Err(err) => Err(NotifyError::Transport(err)),
        }
    }
}
