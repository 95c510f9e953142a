pub mod reader;
pub mod sender;

use crate::config::AppConfig;
use crate::http::{ReqwestTransport, RequestExecutor, Transport};
use crate::model::{CallResult, RequestError};
use crate::utils::FormEncoding;
use std::time::Duration;

pub struct TelegramBot<T = ReqwestTransport> {
    pub api_base: String,
    pub bot_token: String,
    pub executor: RequestExecutor<T>,
    pub encoding: FormEncoding,
}

impl TelegramBot<ReqwestTransport> {
    pub fn from_config(config: &AppConfig) -> Result<Self, RequestError> {
        let transport = ReqwestTransport::new(config.timeout_seconds.map(Duration::from_secs))?;
        let executor = RequestExecutor::new(transport).with_max_body_bytes(config.max_body_bytes);
        let encoding = if config.raw_form_body {
            FormEncoding::Raw
        } else {
            FormEncoding::Encoded
        };
        Ok(TelegramBot::new(config.api_base(), &config.telegram_bot_token, executor).with_encoding(encoding))
    }
}

impl<T: Transport> TelegramBot<T> {
    pub fn new(api_base: &str, bot_token: &str, executor: RequestExecutor<T>) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            bot_token: bot_token.to_string(),
            executor,
            encoding: FormEncoding::default(),
        }
    }

    pub fn with_encoding(mut self, encoding: FormEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// `<api_base>/bot<token>/<method>`
    pub fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.bot_token, method)
    }

    pub async fn read_last_message(&self) -> Result<CallResult, RequestError> {
        reader::read_last_message(self).await
    }

    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<CallResult, RequestError> {
        sender::send_message(self, chat_id, text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_support::MockTransport;

    #[test]
    fn method_url_joins_base_token_and_method() {
        let bot = TelegramBot::new(
            "https://api.telegram.org/",
            "123:ABC",
            RequestExecutor::new(MockTransport::replying(200, "{}")),
        );
        assert_eq!(bot.method_url("getUpdates"), "https://api.telegram.org/bot123:ABC/getUpdates");
    }

    #[test]
    fn from_config_picks_raw_encoding_when_asked() {
        let config: AppConfig = serde_json::from_str(
            r#"{"telegram_bot_token":"t","api_base":"http://localhost:9/","raw_form_body":true,"timeout_seconds":3}"#,
        )
        .unwrap();
        let bot = TelegramBot::from_config(&config).unwrap();
        assert_eq!(bot.encoding, FormEncoding::Raw);
        assert_eq!(bot.method_url("getMe"), "http://localhost:9/bott/getMe");
    }
}
