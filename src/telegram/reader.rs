// telegram/reader.rs

use crate::http::{HttpMethod, Transport};
use crate::model::{CallResult, RequestError};
use crate::telegram::TelegramBot;
use tracing::info;

/// Fetches pending updates once and keeps only the newest one.
pub async fn read_last_message<T: Transport>(bot: &TelegramBot<T>) -> Result<CallResult, RequestError> {
    let url = bot.method_url("getUpdates");
    let result = bot.executor.execute(HttpMethod::Get, &url, None).await?;
    if result.is_empty() {
        info!("📭 No updates available");
    } else {
        info!("📨 Last update {}: {:?}", result.update_id, result.text);
    }
    Ok(result)
}
