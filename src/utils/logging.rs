//! Logging utilities
//!
//! Subscriber setup and request summaries that never leak the API key

use crate::models::RequestDescriptor;
use anyhow::Result;

/// Set to true to include full request bodies in debug logs
pub const VERBOSE_REQUEST_LOGGING: bool = false;

const REDACTED: &str = "[redacted]";

/// Query parameters and headers that carry credentials
const SECRET_KEYS: [&str; 2] = ["key", "x-goog-api-key"];

/// Truncate a string to at most `max_len` bytes, noting how many characters were cut
pub fn truncate_content(s: &str, max_len: usize) -> String {
    if s.len() > max_len {
        let mut cut = max_len;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}... ({} chars truncated)", &s[..cut], s[cut..].chars().count())
    } else {
        s.to_string()
    }
}

fn redact_pairs(pairs: &[(String, String)]) -> serde_json::Map<String, serde_json::Value> {
    pairs
        .iter()
        .map(|(k, v)| {
            let value = if SECRET_KEYS.iter().any(|s| k.eq_ignore_ascii_case(s)) {
                REDACTED.to_string()
            } else {
                v.clone()
            };
            (k.clone(), serde_json::Value::String(value))
        })
        .collect()
}

/// Create a summary of a request for logging, with credentials redacted
pub fn request_log_summary(request: &RequestDescriptor) -> serde_json::Value {
    let body = match &request.body {
        Some(body) if VERBOSE_REQUEST_LOGGING => body.clone(),
        Some(body) => serde_json::Value::String(truncate_content(&body.to_string(), 200)),
        None => serde_json::Value::Null,
    };

    serde_json::json!({
        "method": request.method.as_str(),
        "url": request.url,
        "query": redact_pairs(&request.query),
        "headers": redact_pairs(&request.headers),
        "body": body,
    })
}

/// Initialize a global tracing subscriber
///
/// Reads `RUST_LOG` (default `info`) and `LOG_FORMAT` (`text` or `json`).
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if log_format == "json" {
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(log_level)
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .finish(),
        )
    } else {
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(log_level)
                .with_target(false)
                .with_thread_ids(false)
                .finish(),
        )
    };

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    tracing::debug!("Logging system initialized");
    Ok(())
}
