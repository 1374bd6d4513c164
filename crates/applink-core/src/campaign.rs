use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Maximum length of an App Store campaign token.
pub const MAX_LENGTH: usize = 30;

/// Punctuation accepted by App Store Connect in campaign names, on top of
/// ASCII letters, digits and space.
const ALLOWED_PUNCTUATION: &str = r#"[]/\-~+=<>:;,._'"*&$%#@?!|{}()"#;

/// A campaign token safe to embed as the `ct` value of an App Store link.
///
/// Tokens hold at most 30 characters, all of them ASCII letters, digits,
/// space, or one of `[ ] / \ - ~ + = < > : ; , . _ ' " * & $ % # @ ? ! | { } ( )`.
/// They carry no leading or trailing whitespace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CampaignToken(String);

impl CampaignToken {
    /// Sanitizes arbitrary text into a campaign token.
    ///
    /// Disallowed characters are dropped, surrounding whitespace is trimmed
    /// and the result is cut to [`MAX_LENGTH`] characters. This never fails;
    /// empty input gives an empty token.
    pub fn sanitize(text: &str) -> Self {
        let filtered: String = text.chars().filter(|c| is_allowed(*c)).collect();
        let truncated: String = filtered.trim().chars().take(MAX_LENGTH).collect();
        Self(truncated.trim_end().to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Returns whether `c` may appear in a campaign token.
pub fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || ALLOWED_PUNCTUATION.contains(c)
}

impl Display for CampaignToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CampaignToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
