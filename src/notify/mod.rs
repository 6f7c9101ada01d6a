use crate::config::Config;
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),
}

/// Outbound operator alerts. Two destinations: an info channel for errors
/// and housekeeping, a notification channel for payment events.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_info(&self, text: &str) -> Result<(), NotifyError>;
    async fn send_payment(&self, text: &str) -> Result<(), NotifyError>;
}

pub struct TelegramNotifier {
    bot: Bot,
    info_chat: ChatId,
    notification_chat: ChatId,
}

impl TelegramNotifier {
    pub fn new(bot: Bot, config: &Config) -> Self {
        Self {
            bot,
            info_chat: ChatId(config.telegram_info_chat_id),
            notification_chat: ChatId(config.telegram_notification_chat_id),
        }
    }

    async fn send(&self, chat: ChatId, text: &str) -> Result<(), NotifyError> {
        self.bot.send_message(chat, text).await?;
        Ok(())
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_info(&self, text: &str) -> Result<(), NotifyError> {
        self.send(self.info_chat, text).await
    }

    async fn send_payment(&self, text: &str) -> Result<(), NotifyError> {
        self.send(self.notification_chat, text).await
    }
}
