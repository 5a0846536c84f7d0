const MAX_PREVIEW_LENGTH: usize = 80;
const BOT_TOKEN_MARKER: &str = "/bot";

/// Shortens user content (transcripts, summaries) for logging.
pub fn preview_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    if total > MAX_PREVIEW_LENGTH {
        let head: String = trimmed.chars().take(MAX_PREVIEW_LENGTH).collect();
        format!("{}... ({} chars total)", head, total)
    } else {
        trimmed.to_string()
    }
}

/// Masks the token embedded in Telegram Bot API URLs
/// (`.../bot<TOKEN>/getFile`, `.../file/bot<TOKEN>/voice/file_1.oga`).
pub fn redact_bot_token(url: &str) -> String {
    let mut result = String::with_capacity(url.len());
    let mut rest = url;

    while let Some(idx) = rest.find(BOT_TOKEN_MARKER) {
        let token_start = idx + BOT_TOKEN_MARKER.len();
        result.push_str(&rest[..token_start]);

        let token_end = rest[token_start..]
            .find(['/', '?'])
            .map(|i| token_start + i)
            .unwrap_or(rest.len());
        // Bot tokens look like `<digits>:<secret>`.
        let segment = &rest[token_start..token_end];
        if segment.contains(':') {
            result.push_str("[REDACTED]");
        } else {
            result.push_str(segment);
        }
        rest = &rest[token_end..];
    }

    result.push_str(rest);
    result
}
