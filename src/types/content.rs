//! Message content and wire content parts

use serde::{Deserialize, Serialize};

/// Message content: plain text or an arbitrary structured JSON value
#[derive(Debug, Clone, PartialEq)]
pub enum MessageContent {
    Text(String),
    Structured(serde_json::Value),
}

impl MessageContent {
    /// Get the text content, if the content is a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageContent::Text(s) => Some(s),
            MessageContent::Structured(value) => value.as_str(),
        }
    }

    /// Text as sent on the wire: strings verbatim, compact JSON otherwise
    pub fn to_text(&self) -> String {
        match self {
            MessageContent::Text(s) => s.clone(),
            MessageContent::Structured(serde_json::Value::String(s)) => s.clone(),
            MessageContent::Structured(value) => value.to_string(),
        }
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        MessageContent::Text(text)
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        MessageContent::Text(text.to_string())
    }
}

/// A JSON string becomes `Text`; anything else stays structured.
impl From<serde_json::Value> for MessageContent {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => MessageContent::Text(s),
            other => MessageContent::Structured(other),
        }
    }
}

/// Image reference carried by an `image_url` content part
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

/// One entry of a wire message's `content` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        ContentPart::Text { text: text.into() }
    }

    pub fn image_url(url: impl Into<String>) -> Self {
        ContentPart::ImageUrl {
            image_url: ImageUrl { url: url.into() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn structured_content_is_compact_json() {
        let content = MessageContent::from(json!({"a": 1}));
        assert_eq!(content.to_text(), r#"{"a":1}"#);
        assert!(content.as_text().is_none());
    }

    #[test]
    fn json_string_becomes_text() {
        let content = MessageContent::from(json!("plain"));
        assert_eq!(content, MessageContent::Text("plain".into()));
    }

    #[test]
    fn content_part_tags() {
        let part = serde_json::to_value(ContentPart::image_url("https://x/y.png")).unwrap();
        assert_eq!(
            part,
            json!({"type": "image_url", "image_url": {"url": "https://x/y.png"}})
        );

        let part = serde_json::to_value(ContentPart::text("hi")).unwrap();
        assert_eq!(part, json!({"type": "text", "text": "hi"}));
    }
}
