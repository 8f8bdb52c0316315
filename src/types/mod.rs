//! Public types for the Parley API.

mod content;
mod function_call;
mod message;
mod response;
mod role;

pub use content::{ContentPart, ImageUrl, MessageContent};
pub use function_call::{ChatFunctionCall, WireFunctionCall};
pub use message::{ChatMessage, WireMessage};
pub use response::{ChatCompletion, CompletionChoice, ResponseFunctionCall, ResponseMessage};
pub use role::ChatRole;
