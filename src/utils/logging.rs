//! Logging utilities
//!
//! Helpers for keeping prompt text out of logs at full length

/// Maximum prompt characters included in log lines
pub const PROMPT_PREVIEW_CHARS: usize = 80;

/// Truncate a string with a note about original length
pub fn truncate_content(s: &str, max_chars: usize) -> String {
    let total = s.chars().count();
    if total > max_chars {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}... ({} chars truncated)", head, total - max_chars)
    } else {
        s.to_string()
    }
}

/// Log-safe preview of a prompt
pub fn prompt_preview(prompt: &str) -> String {
    truncate_content(prompt, PROMPT_PREVIEW_CHARS)
}
