use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{
    Json,
    response::{IntoResponse, Response},
};

use crate::shared::MALFORMED_COMMAND_MESSAGE;
use crate::shared::error::InteractionError;
use crate::shared::structs::AppState;
use crate::shared::structs::discord::interaction::{
    Interaction, InteractionType, VerifiedInteraction,
};
use crate::shared::structs::discord::response::{InteractionResponse, MessagePayload};

/// What to do with an interaction whose signature already checked out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Pong,
    Reply(MessagePayload),
    Defer(VerifiedInteraction),
}

pub fn classify(interaction: Interaction) -> Dispatch {
    if interaction.r#type == InteractionType::Ping {
        return Dispatch::Pong;
    }

    match VerifiedInteraction::try_from(interaction) {
        Ok(verified) => Dispatch::Defer(verified),
        Err(malformed) => {
            tracing::warn!(
                "Received non-ping interaction without command data: {:?}",
                &malformed
            );
            Dispatch::Reply(MessagePayload::ephemeral(MALFORMED_COMMAND_MESSAGE))
        }
    }
}

pub async fn handle_interaction(State(app_state): State<AppState>, request: Bytes) -> Response {
    match dispatch(&request, &app_state).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn dispatch(
    bytes: &[u8],
    app_state: &AppState,
) -> Result<InteractionResponse, InteractionError> {
    let interaction = Interaction::from_slice(bytes)?;
    tracing::debug!("Received incoming interaction: {:?}", &interaction);

    match classify(interaction) {
        Dispatch::Pong => Ok(InteractionResponse::pong()),
        Dispatch::Reply(payload) => Ok(InteractionResponse::message(payload)),
        Dispatch::Defer(verified) => {
            // Only the acknowledgment is awaited; the command itself runs elsewhere.
            app_state
                .command_invoker
                .invoke(&verified)
                .await
                .map_err(|e| InteractionError::Invocation(format!("{e:?}")))?;
            Ok(InteractionResponse::deferred())
        }
    }
}
