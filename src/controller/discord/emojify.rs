use command_macros::command_handler;

use crate::shared::structs::AppState;
use crate::shared::structs::discord::interaction::VerifiedInteraction;
use crate::shared::structs::discord::response::MessagePayload;

// No fallback message: a failing emojify service fails the invocation.
#[command_handler]
pub async fn emojify(
    interaction: VerifiedInteraction,
    app_state: AppState,
) -> anyhow::Result<MessagePayload> {
    let message = interaction
        .first_option_value()
        .ok_or_else(|| anyhow::anyhow!("emojify invoked without a message option"))?;

    let content = app_state.emojifier.emojify(message).await?;

    Ok(MessagePayload::public(content))
}
