use std::fmt;

/// A trimmed, non-empty query string ready to be sent to the search API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(raw_input: &str) -> Option<Self> {
        let trimmed = raw_input.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(Self {
            text: trimmed.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn to_form_body(&self, field_name: &str) -> String {
        format!("{}={}", field_name, urlencoding::encode(&self.text))
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
