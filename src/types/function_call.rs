//! Function call types

use serde::{Deserialize, Serialize};

use super::response::ResponseFunctionCall;
use crate::{ParleyError, Result};

/// A function invocation requested by the model, with decoded arguments
#[derive(Debug, Clone, PartialEq)]
pub struct ChatFunctionCall {
    name: String,
    arguments: serde_json::Value,
}

impl ChatFunctionCall {
    pub fn new(name: impl Into<String>, arguments: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Decode the JSON-string arguments of a response function call.
    ///
    /// The arguments must decode to a JSON object; a blank string is not
    /// valid JSON and fails like any other malformed payload.
    pub fn from_response_function_call(call: &ResponseFunctionCall) -> Result<Self> {
        let arguments: serde_json::Value =
            serde_json::from_str(&call.arguments).map_err(|e| ParleyError::FunctionCallDecoding {
                name: call.name.clone(),
                reason: e.to_string(),
            })?;

        if !arguments.is_object() {
            return Err(ParleyError::FunctionCallDecoding {
                name: call.name.clone(),
                reason: "arguments are not a JSON object".into(),
            });
        }

        Ok(Self::new(call.name.clone(), arguments))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &serde_json::Value {
        &self.arguments
    }

    /// Parse the arguments into a typed value
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        &self,
    ) -> std::result::Result<T, serde_json::Error> {
        T::deserialize(&self.arguments)
    }

    /// Wire form: arguments re-encoded as a compact JSON string
    pub fn to_wire(&self) -> WireFunctionCall {
        WireFunctionCall {
            name: self.name.clone(),
            arguments: self.arguments.to_string(),
        }
    }
}

/// `function_call` object of a wire message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireFunctionCall {
    pub name: String,
    pub arguments: String, // JSON string
}
