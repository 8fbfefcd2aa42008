use serde_json::Value;

/// Picks a human-readable message out of an upstream error body.
///
/// JSON bodies contribute their `error` or `message` string field, plain text
/// bodies are used trimmed, and anything else yields `fallback`.
pub fn error_message(body: &str, fallback: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return fallback.to_string();
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => ["error", "message"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::trim)
            .filter(|msg| !msg.is_empty())
            .unwrap_or(fallback)
            .to_string(),
        Ok(Value::String(text)) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => fallback.to_string(),
        Err(_) => trimmed.to_string(),
    }
}
