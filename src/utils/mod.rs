/// Masks a Telegram bot token (`<bot id>:<secret>`) for logging, keeping only
/// the bot id.
pub fn mask_token(token: &str) -> String {
    match token.split_once(':') {
        Some((bot_id, secret)) if !secret.is_empty() => format!("{bot_id}:****"),
        _ => "****".to_string(),
    }
}
