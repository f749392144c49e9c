use command_macros::command_handler;

use crate::shared::structs::AppState;
use crate::shared::structs::discord::interaction::VerifiedInteraction;
use crate::shared::structs::discord::response::MessagePayload;
use crate::shared::utility::notation;

#[command_handler]
pub async fn roll(
    interaction: VerifiedInteraction,
    app_state: AppState,
) -> anyhow::Result<MessagePayload> {
    let expression = interaction.first_option_value().unwrap_or_default();

    Ok(notation::roll(expression, app_state.roll_evaluator.as_ref()).await)
}
