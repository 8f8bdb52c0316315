//! Parley - chat messages for chat-completion LLM APIs
//!
//! This crate provides an immutable [`ChatMessage`] value that can be built
//! by hand or from a decoded API response, and converted into the JSON shape
//! a chat-completion request expects.
//!
//! # Example
//!
//! ```rust
//! use parley::{ChatMessage, ChatRole, ResponseMessage};
//!
//! fn main() -> parley::Result<()> {
//!     let question = ChatMessage::user("What's in this picture?")
//!         .with_image_url("https://example.com/cat.png");
//!
//!     let body = serde_json::json!({ "model": "gpt-4o", "messages": [question] });
//!     assert_eq!(body["messages"][0]["content"][1]["type"], "image_url");
//!
//!     let reply = ChatMessage::from_response_message(
//!         &ResponseMessage::new("assistant").with_content("A cat."),
//!     )?;
//!     assert_eq!(reply.role(), ChatRole::Assistant);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod types;

// Re-export main types at crate root
pub use error::{ParleyError, Result};

// Re-export all types
pub use types::{
    ChatCompletion, ChatFunctionCall, ChatMessage, ChatRole, CompletionChoice, ContentPart,
    ImageUrl, MessageContent, ResponseFunctionCall, ResponseMessage, WireFunctionCall, WireMessage,
};
