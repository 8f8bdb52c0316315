//! Chat-completion response types

use serde::{Deserialize, Deserializer, Serialize};

use super::message::ChatMessage;
use crate::{ParleyError, Result};

/// Function call payload of a response message, arguments still encoded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseFunctionCall {
    pub name: String,
    #[serde(default)]
    pub arguments: String, // JSON string
}

impl ResponseFunctionCall {
    pub fn new(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into(),
        }
    }
}

/// The `message` object of a chat-completion choice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub role: String,
    #[serde(default, deserialize_with = "null_as_none")]
    pub content: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<ResponseFunctionCall>,
}

impl ResponseMessage {
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<serde_json::Value>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn with_function_call(mut self, call: ResponseFunctionCall) -> Self {
        self.function_call = Some(call);
        self
    }
}

// `Option<Value>` would otherwise keep an explicit null as `Some(Value::Null)`.
fn null_as_none<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok((!value.is_null()).then_some(value))
}

/// One entry of a completion's `choices`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionChoice {
    #[serde(default)]
    pub index: u32,
    pub message: ResponseMessage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Non-streaming chat-completion response body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

impl ChatCompletion {
    /// Parse a raw response body
    pub fn from_json_str(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Message of the first choice
    pub fn first_message(&self) -> Result<ChatMessage> {
        let choice = self.choices.first().ok_or(ParleyError::EmptyResponse)?;
        ChatMessage::from_response_message(&choice.message)
    }

    /// Messages of every choice, in order
    pub fn messages(&self) -> Result<Vec<ChatMessage>> {
        self.choices
            .iter()
            .map(|choice| ChatMessage::from_response_message(&choice.message))
            .collect()
    }
}
