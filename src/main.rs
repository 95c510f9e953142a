mod config;
mod http;
mod model;
mod parser;
mod telegram;
mod utils;

use clap::{Parser, Subcommand};
use config::{AppConfig, load_config};
use model::CallResult;
use telegram::TelegramBot;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tg-relay", version, about = "Read the latest Telegram update or send a message")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to config file.
    #[arg(short, long, default_value = "config.json")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the newest pending update.
    Read,
    /// Send a text message.
    Send {
        /// Target chat; defaults to `telegram_chat_id` from the config.
        #[arg(long)]
        chat_id: Option<String>,
        /// Message text. Falls back to `message` from the config.
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Read the newest update, then send the configured message.
    Demo,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let config = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let bot = match TelegramBot::from_config(&config) {
        Ok(bot) => bot,
        Err(e) => {
            error!("Failed to initialize HTTP client: {}", e);
            return;
        }
    };

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Read => read_last_message(&bot).await,
        Commands::Send { chat_id, text } => {
            let text = if text.is_empty() {
                config.message().to_string()
            } else {
                text.join(" ")
            };
            send_message(&bot, &config, chat_id, &text).await;
        }
        Commands::Demo => {
            read_last_message(&bot).await;
            send_message(&bot, &config, None, config.message()).await;
        }
    }
}

async fn read_last_message(bot: &TelegramBot) {
    let result = bot.read_last_message().await.unwrap_or_default();
    print_result(&result);
}

async fn send_message(bot: &TelegramBot, config: &AppConfig, chat_id: Option<String>, text: &str) {
    let Some(chat_id) = chat_id.or_else(|| config.telegram_chat_id.clone()) else {
        warn!("No chat id given and telegram_chat_id is not configured, nothing sent");
        return;
    };
    match bot.send_message(&chat_id, text).await {
        Ok(_) => info!("✅ Message handed to Telegram for chat {}", chat_id),
        Err(e) => warn!("Telegram send error: {}", e),
    }
}

fn print_result(result: &CallResult) {
    println!("Update ID: {}", result.update_id);
    println!("Text: {}", result.text);
}
