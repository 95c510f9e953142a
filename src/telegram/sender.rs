// telegram/sender.rs

use crate::http::{HttpMethod, Transport};
use crate::model::{CallResult, RequestError};
use crate::telegram::TelegramBot;
use crate::utils::encode_form;
use tracing::info;

/// Posts `text` to `chat_id` via `sendMessage`.
pub async fn send_message<T: Transport>(
    bot: &TelegramBot<T>,
    chat_id: &str,
    text: &str,
) -> Result<CallResult, RequestError> {
    let url = bot.method_url("sendMessage");
    let body = encode_form(&[("chat_id", chat_id), ("text", text)], bot.encoding);
    info!("📤 Sending Telegram message to {} ({} chars)", chat_id, text.chars().count());
    bot.executor.execute(HttpMethod::Post, &url, Some(body)).await
}
