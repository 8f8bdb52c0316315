//! Message types for chat conversations

use serde::{Deserialize, Serialize, Serializer};

use super::content::{ContentPart, MessageContent};
use super::function_call::{ChatFunctionCall, WireFunctionCall};
use super::response::ResponseMessage;
use super::role::ChatRole;
use crate::{ParleyError, Result};

/// A chat message.
///
/// Immutable once built: fields are read through accessors and every
/// `with_*` method returns a new message.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    role: ChatRole,
    name: Option<String>,
    content: Option<MessageContent>,
    function_call: Option<ChatFunctionCall>,
    image_url: Option<String>,
}

impl ChatMessage {
    /// Create a message with only a role set
    pub fn new(role: ChatRole) -> Self {
        Self {
            role,
            name: None,
            content: None,
            function_call: None,
            image_url: None,
        }
    }

    /// Create a message from a role string, rejecting unknown roles
    pub fn try_new(role: &str) -> Result<Self> {
        Ok(Self::new(role.parse()?))
    }

    /// Create a message from every field at once
    pub fn from_parts(
        role: ChatRole,
        content: Option<MessageContent>,
        name: Option<String>,
        function_call: Option<ChatFunctionCall>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            role,
            name,
            content,
            function_call,
            image_url,
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<MessageContent>) -> Self {
        Self::new(ChatRole::System).with_content(content)
    }

    /// Create a user message
    pub fn user(content: impl Into<MessageContent>) -> Self {
        Self::new(ChatRole::User).with_content(content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<MessageContent>) -> Self {
        Self::new(ChatRole::Assistant).with_content(content)
    }

    /// Create a function result message
    pub fn function(name: impl Into<String>, content: impl Into<MessageContent>) -> Self {
        Self::new(ChatRole::Function)
            .with_name(name)
            .with_content(content)
    }

    /// Build a message from an API response message.
    ///
    /// The role must be one of the known roles and a function call payload,
    /// when present, must carry decodable arguments.
    #[tracing::instrument(level = "trace", skip_all, fields(role = %message.role))]
    pub fn from_response_message(message: &ResponseMessage) -> Result<Self> {
        let role = ChatRole::lookup(&message.role).ok_or_else(|| {
            tracing::debug!(role = %message.role, "rejecting response message with unknown role");
            ParleyError::UnrecognizedRole(message.role.clone())
        })?;

        let function_call = message
            .function_call
            .as_ref()
            .map(ChatFunctionCall::from_response_function_call)
            .transpose()
            .inspect_err(|e| tracing::debug!(error = %e, "function call decoding failed"))?;

        Ok(Self {
            role,
            name: None,
            content: message.content.clone().map(MessageContent::from),
            function_call,
            image_url: None,
        })
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<MessageContent>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn with_function_call(mut self, function_call: ChatFunctionCall) -> Self {
        self.function_call = Some(function_call);
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn role(&self) -> ChatRole {
        self.role
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn content(&self) -> Option<&MessageContent> {
        self.content.as_ref()
    }

    pub fn function_call(&self) -> Option<&ChatFunctionCall> {
        self.function_call.as_ref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Convert to the request shape expected by the chat-completion API
    pub fn to_wire(&self) -> WireMessage {
        // absent content is still sent as a text part holding JSON `null`
        let text = self
            .content
            .as_ref()
            .map_or_else(|| serde_json::Value::Null.to_string(), MessageContent::to_text);

        let mut content = vec![ContentPart::text(text)];
        if let Some(url) = self.image_url.as_deref().filter(|url| !url.is_empty()) {
            content.push(ContentPart::image_url(url));
        }

        WireMessage {
            role: self.role,
            content,
            name: self.name.clone().filter(|name| !name.is_empty()),
            function_call: self.function_call.as_ref().map(ChatFunctionCall::to_wire),
        }
    }

    /// Wire form as a JSON value
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.to_wire())?)
    }
}

impl Serialize for ChatMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_wire().serialize(serializer)
    }
}

impl TryFrom<&ResponseMessage> for ChatMessage {
    type Error = ParleyError;

    fn try_from(message: &ResponseMessage) -> Result<Self> {
        Self::from_response_message(message)
    }
}

impl TryFrom<ResponseMessage> for ChatMessage {
    type Error = ParleyError;

    fn try_from(message: ResponseMessage) -> Result<Self> {
        Self::from_response_message(&message)
    }
}

/// A message in the chat-completion request format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: ChatRole,
    pub content: Vec<ContentPart>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<WireFunctionCall>,
}
