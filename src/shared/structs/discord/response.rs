use serde::{Deserialize, Serialize};

/// Message flag that limits visibility to the invoking user.
pub const EPHEMERAL_FLAG: u64 = 1 << 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "i32", into = "i32")]
pub enum InteractionResponseType {
    Pong,
    ChannelMessageWithSource,
    DeferredChannelMessageWithSource,
    Other(i32),
}

impl From<i32> for InteractionResponseType {
    fn from(value: i32) -> Self {
        match value {
            1 => InteractionResponseType::Pong,
            4 => InteractionResponseType::ChannelMessageWithSource,
            5 => InteractionResponseType::DeferredChannelMessageWithSource,
            other => InteractionResponseType::Other(other),
        }
    }
}

impl From<InteractionResponseType> for i32 {
    fn from(value: InteractionResponseType) -> Self {
        match value {
            InteractionResponseType::Pong => 1,
            InteractionResponseType::ChannelMessageWithSource => 4,
            InteractionResponseType::DeferredChannelMessageWithSource => 5,
            InteractionResponseType::Other(other) => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessagePayload {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
}

impl MessagePayload {
    pub fn public(content: impl Into<String>) -> Self {
        MessagePayload {
            content: content.into(),
            flags: None,
        }
    }

    pub fn ephemeral(content: impl Into<String>) -> Self {
        MessagePayload {
            content: content.into(),
            flags: Some(EPHEMERAL_FLAG),
        }
    }

    /// Whether any flag bit is set. A zero value counts as unset.
    pub fn is_flagged(&self) -> bool {
        self.flags.is_some_and(|flags| flags != 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct InteractionResponse {
    pub r#type: InteractionResponseType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<MessagePayload>,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        InteractionResponse {
            r#type: InteractionResponseType::Pong,
            data: None,
        }
    }

    pub fn deferred() -> Self {
        InteractionResponse {
            r#type: InteractionResponseType::DeferredChannelMessageWithSource,
            data: None,
        }
    }

    pub fn message(data: MessagePayload) -> Self {
        InteractionResponse {
            r#type: InteractionResponseType::ChannelMessageWithSource,
            data: Some(data),
        }
    }
}
