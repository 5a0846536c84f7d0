mod bot_api_file_locator;
mod telegram_notifier;

pub use bot_api_file_locator::{BotApiFileLocator, DEFAULT_TELEGRAM_API_URL};
pub use telegram_notifier::TelegramNotifier;
