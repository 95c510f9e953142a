use crate::model::ConfigError;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";
pub const DEFAULT_MESSAGE: &str = "Hello from tg-relay";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub telegram_bot_token: String,
    #[serde(default, deserialize_with = "chat_id_text_or_number")]
    pub telegram_chat_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub max_body_bytes: Option<usize>,
    #[serde(default)]
    pub raw_form_body: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ChatIdValue {
    Number(i64),
    Text(String),
}

/// Chat ids are numeric in the Bot API, but `"123"` is accepted too.
fn chat_id_text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<ChatIdValue>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        ChatIdValue::Number(id) => id.to_string(),
        ChatIdValue::Text(id) => id,
    }))
}

impl AppConfig {
    pub fn api_base(&self) -> &str {
        self.api_base
            .as_deref()
            .map(|base| base.trim_end_matches('/'))
            .unwrap_or(DEFAULT_API_BASE)
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_MESSAGE)
    }

    /// Environment values win over whatever the file said.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("TELEGRAM_BOT_TOKEN").filter(|t| !t.is_empty()) {
            self.telegram_bot_token = token;
        }
        if let Some(chat_id) = lookup("TELEGRAM_CHAT_ID").filter(|c| !c.is_empty()) {
            self.telegram_chat_id = Some(chat_id);
        }
        self
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.telegram_bot_token.trim().is_empty() {
            return Err(ConfigError::Missing("telegram_bot_token"));
        }
        Ok(self)
    }
}

/// Reads `path` (if it exists), then layers `TELEGRAM_*` env vars on top.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let file_config = match fs::read_to_string(path.as_ref()) {
        Ok(content) => serde_json::from_str(&content)?,
        Err(e) if e.kind() == ErrorKind::NotFound => AppConfig::default(),
        Err(e) => return Err(e.into()),
    };
    file_config
        .apply_overrides(|key| std::env::var(key).ok())
        .validate()
}
