//! Conversation roles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParleyError;

/// Role of a message participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
    Function,
}

impl ChatRole {
    /// Every role, in declaration order.
    pub const ALL: [ChatRole; 4] = [
        ChatRole::System,
        ChatRole::User,
        ChatRole::Assistant,
        ChatRole::Function,
    ];

    /// The role's wire string (e.g. `"assistant"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
            ChatRole::Function => "function",
        }
    }

    /// Exact, case-sensitive lookup of a wire string.
    pub(crate) fn lookup(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == value)
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatRole {
    type Err = ParleyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| ParleyError::InvalidEnumValue(s.to_string()))
    }
}

impl TryFrom<&str> for ChatRole {
    type Error = ParleyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
