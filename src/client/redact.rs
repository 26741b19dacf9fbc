//! Secret redaction for remote error text
//!
//! Error bodies from a model endpoint can echo request headers or keys.
//! They pass through here before being logged or shown.

use once_cell::sync::Lazy;
use regex::Regex;

/// Credential shapes that may appear in endpoint responses
pub static SECRET_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // OpenAI-style keys (sk-..., sk-proj-...)
        Regex::new(r"sk-[A-Za-z0-9_\-]{16,}").unwrap(),
        // Bearer tokens
        Regex::new(r"(?i)bearer\s+[A-Za-z0-9_\-\.=]{16,}").unwrap(),
        // Generic key assignments
        Regex::new(r"(?i)api[_-]?key\s*[=:]\s*['\x22]?[a-zA-Z0-9_\-]{16,}").unwrap(),
    ]
});

/// Redact secrets in text
pub fn redact_secrets(text: &str) -> String {
    let mut redacted = text.to_string();

    for pattern in SECRET_PATTERNS.iter() {
        redacted = pattern.replace_all(&redacted, "[REDACTED]").to_string();
    }

    redacted
}
