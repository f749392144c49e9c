use serde::{Deserialize, Serialize};

use crate::shared::error::InteractionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "i32", into = "i32")]
pub enum InteractionType {
    Ping,
    ApplicationCommand,
    Unsupported(i32),
}

impl From<i32> for InteractionType {
    fn from(value: i32) -> Self {
        match value {
            1 => InteractionType::Ping,
            2 => InteractionType::ApplicationCommand,
            other => InteractionType::Unsupported(other),
        }
    }
}

impl From<InteractionType> for i32 {
    fn from(value: InteractionType) -> Self {
        match value {
            InteractionType::Ping => 1,
            InteractionType::ApplicationCommand => 2,
            InteractionType::Unsupported(other) => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CommandOption {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CommandData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

/// An inbound interaction exactly as Discord sent it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Interaction {
    pub r#type: InteractionType,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub data: Option<CommandData>,
}

impl Interaction {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, InteractionError> {
        serde_json::from_slice(bytes).map_err(|e| InteractionError::Validation(e.to_string()))
    }
}

/// An interaction whose signature has been checked and which carries command data.
/// This is the payload handed to the command router.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerifiedInteraction {
    pub r#type: InteractionType,
    pub token: String,
    pub data: CommandData,
}

impl VerifiedInteraction {
    pub fn command_name(&self) -> &str {
        &self.data.name
    }

    pub fn first_option_value(&self) -> Option<&str> {
        self.data.options.first().map(|option| option.value.as_str())
    }
}

impl TryFrom<Interaction> for VerifiedInteraction {
    type Error = Interaction;

    fn try_from(interaction: Interaction) -> Result<Self, Self::Error> {
        match interaction.data {
            Some(data) => Ok(VerifiedInteraction {
                r#type: interaction.r#type,
                token: interaction.token,
                data,
            }),
            None => Err(interaction),
        }
    }
}
