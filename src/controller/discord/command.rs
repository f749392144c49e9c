use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Mutex, PoisonError};

use crate::shared::error::InteractionError;
use crate::shared::structs::AppState;
use crate::shared::structs::discord::interaction::VerifiedInteraction;
use crate::shared::structs::discord::response::MessagePayload;
use crate::shared::utility::discord::FollowupClient;
use crate::shared::{INVOCATION_ID_HEADER, INVOCATION_SECRET_HEADER, UNKNOWN_COMMAND_MESSAGE};

type CommandHandler = fn(
    VerifiedInteraction,
    AppState,
) -> Pin<Box<dyn Future<Output = anyhow::Result<MessagePayload>> + Send>>;

lazy_static::lazy_static! {
    static ref COMMAND_REGISTRY: Mutex<HashMap<String, CommandHandler>> = Mutex::new(HashMap::new());
}

pub fn register_command(name: &str, handler: CommandHandler) {
    COMMAND_REGISTRY
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(name.to_string(), handler);
}

fn find_command(name: &str) -> Option<CommandHandler> {
    COMMAND_REGISTRY
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
        .copied()
}

/// Entry point for handed-off interactions. Acknowledges immediately and
/// finishes the command on a detached task.
pub async fn handle_command(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    request: Bytes,
) -> Response {
    let secret = headers
        .get(INVOCATION_SECRET_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if !secret_matches(secret, &app_state.config.invocation_secret) {
        tracing::warn!("Rejected command invocation with a wrong secret.");
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let invocation_id = headers
        .get(INVOCATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let interaction = match serde_json::from_slice::<VerifiedInteraction>(&request) {
        Ok(interaction) => interaction,
        Err(e) => return InteractionError::Validation(e.to_string()).into_response(),
    };

    tracing::debug!(
        "Accepted invocation {} for command {}",
        &invocation_id,
        interaction.command_name()
    );

    tokio::spawn(async move {
        if let Err(e) = execute(interaction, app_state).await {
            let error_msg = format!("Invocation {invocation_id} failed: {e:?}");
            tracing::error!("{}", &error_msg);
        }
    });

    StatusCode::ACCEPTED.into_response()
}

// Compares every byte regardless of where the first mismatch is.
fn secret_matches(provided: &str, expected: &str) -> bool {
    if provided.is_empty() || provided.len() != expected.len() {
        return false;
    }

    provided
        .bytes()
        .zip(expected.bytes())
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}

pub async fn execute(interaction: VerifiedInteraction, app_state: AppState) -> anyhow::Result<()> {
    let token = interaction.token.clone();
    let followup_client = app_state.followup_client.clone();

    let payload = route(interaction, app_state).await?;
    deliver(&token, &payload, followup_client.as_ref()).await
}

pub async fn route(
    interaction: VerifiedInteraction,
    app_state: AppState,
) -> anyhow::Result<MessagePayload> {
    match find_command(interaction.command_name()) {
        Some(handler) => handler(interaction, app_state).await,
        None => {
            tracing::warn!("Unknown command: {}", interaction.command_name());
            Ok(MessagePayload::ephemeral(UNKNOWN_COMMAND_MESSAGE))
        }
    }
}

/// Replaces the deferred placeholder. Flagged results cannot reuse the
/// placeholder's visibility, so the placeholder is deleted and a new message posted.
pub async fn deliver(
    token: &str,
    payload: &MessagePayload,
    followup_client: &dyn FollowupClient,
) -> anyhow::Result<()> {
    if payload.is_flagged() {
        followup_client.delete_original(token).await?;
        followup_client.create_followup(token, payload).await?;
    } else {
        followup_client
            .edit_original(token, &payload.content)
            .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::structs::discord::interaction::{
        CommandData, CommandOption, InteractionType,
    };
    use crate::shared::test_support::{FollowupCall, MockEmojifier, TestHarness};

    fn interaction(name: &str, options: &[&str]) -> VerifiedInteraction {
        VerifiedInteraction {
            r#type: InteractionType::ApplicationCommand,
            token: "tok".into(),
            data: CommandData {
                id: None,
                name: name.into(),
                options: options
                    .iter()
                    .map(|value| CommandOption {
                        name: "input".into(),
                        value: value.to_string(),
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn secret_must_match_exactly() {
        assert!(secret_matches("s3cret", "s3cret"));
        assert!(!secret_matches("s3creT", "s3cret"));
        assert!(!secret_matches("s3cre", "s3cret"));
        assert!(!secret_matches("s3cret!", "s3cret"));
        assert!(!secret_matches("", ""));
    }

    #[tokio::test]
    async fn unknown_commands_get_ephemeral_reply() {
        let harness = TestHarness::new();

        for (name, options) in [
            ("Roll", vec!["2d6"]),
            ("ROLL", vec![]),
            ("weather", vec!["a", "b"]),
            ("", vec![]),
        ] {
            let payload = route(interaction(name, &options), harness.app_state(""))
                .await
                .unwrap();
            assert_eq!(payload, MessagePayload::ephemeral(UNKNOWN_COMMAND_MESSAGE));
        }
    }

    #[tokio::test]
    async fn roll_is_routed_to_the_notation_compiler() {
        let harness = TestHarness::new();
        let payload = route(interaction("roll", &["2d6-2"]), harness.app_state(""))
            .await
            .unwrap();

        assert_eq!(payload, MessagePayload::public("(3) + (5) - 2 = 6"));
        assert_eq!(harness.roll_evaluator.requests().len(), 1);
    }

    #[tokio::test]
    async fn emojify_passes_the_message_through() {
        let harness = TestHarness::new();
        let payload = route(interaction("emojify", &["hello"]), harness.app_state(""))
            .await
            .unwrap();

        assert_eq!(payload, MessagePayload::public("hello 🎲"));
        assert_eq!(*harness.emojifier.messages.lock().unwrap(), vec!["hello"]);
    }

    #[tokio::test]
    async fn emojify_failure_propagates() {
        let harness = TestHarness::new().with_emojifier(MockEmojifier {
            fail: true,
            messages: Default::default(),
        });
        let result = route(interaction("emojify", &["hello"]), harness.app_state("")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn unflagged_result_edits_the_original_once() {
        let harness = TestHarness::new();
        deliver(
            "tok",
            &MessagePayload::public("(6) = 6"),
            harness.followup.as_ref(),
        )
        .await
        .unwrap();

        assert_eq!(
            harness.followup.calls(),
            vec![FollowupCall::Edit {
                token: "tok".into(),
                content: "(6) = 6".into()
            }]
        );
    }

    #[tokio::test]
    async fn flagged_result_deletes_then_posts() {
        let harness = TestHarness::new();
        let payload = MessagePayload::ephemeral(UNKNOWN_COMMAND_MESSAGE);
        deliver("tok", &payload, harness.followup.as_ref())
            .await
            .unwrap();

        assert_eq!(
            harness.followup.calls(),
            vec![
                FollowupCall::Delete {
                    token: "tok".into()
                },
                FollowupCall::Create {
                    token: "tok".into(),
                    payload
                },
            ]
        );
    }

    #[tokio::test]
    async fn execute_routes_and_delivers_rejections_as_new_message() {
        let harness = TestHarness::new();
        execute(interaction("roll", &["banana"]), harness.app_state(""))
            .await
            .unwrap();

        let calls = harness.followup.calls();
        assert_eq!(calls.len(), 2);
        assert!(matches!(calls[0], FollowupCall::Delete { .. }));
        assert!(harness.roll_evaluator.requests().is_empty());
    }

    #[tokio::test]
    async fn execute_without_options_rejects_the_roll() {
        let harness = TestHarness::new();
        execute(interaction("roll", &[]), harness.app_state(""))
            .await
            .unwrap();

        assert_eq!(
            harness.followup.calls()[1],
            FollowupCall::Create {
                token: "tok".into(),
                payload: MessagePayload::ephemeral(crate::shared::NOTATION_REJECTED_MESSAGE)
            }
        );
    }
}
