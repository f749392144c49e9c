use async_trait::async_trait;

use crate::shared::structs::discord::interaction::VerifiedInteraction;
use crate::shared::{INVOCATION_ID_HEADER, INVOCATION_SECRET_HEADER};

/// Fire-and-forget hand-off of a verified interaction to the command router.
///
/// Returning `Ok` means the hand-off was acknowledged, not that the command ran.
#[async_trait]
pub trait CommandInvoker: Send + Sync {
    async fn invoke(&self, interaction: &VerifiedInteraction) -> anyhow::Result<()>;
}

#[derive(Debug, Clone)]
pub struct HttpCommandInvoker {
    http_client: reqwest::Client,
    endpoint: String,
    secret: String,
}

impl HttpCommandInvoker {
    pub fn new(http_client: reqwest::Client, endpoint: &str, secret: &str) -> Self {
        HttpCommandInvoker {
            http_client,
            endpoint: endpoint.to_string(),
            secret: secret.to_string(),
        }
    }
}

#[async_trait]
impl CommandInvoker for HttpCommandInvoker {
    async fn invoke(&self, interaction: &VerifiedInteraction) -> anyhow::Result<()> {
        let invocation_id = uuid::Uuid::now_v7();
        tracing::debug!(
            "Handing off command {} as invocation {}",
            interaction.command_name(),
            invocation_id
        );

        self.http_client
            .post(&self.endpoint)
            .header(INVOCATION_SECRET_HEADER, &self.secret)
            .header(INVOCATION_ID_HEADER, invocation_id.to_string())
            .json(interaction)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
