use async_trait::async_trait;

use crate::shared::structs::discord::response::MessagePayload;
use crate::shared::{DISCORD_FOLLOWUP_ENDPOINT, DISCORD_INTERACTION_EDIT_ENDPOINT};

/// Out-of-band delivery of command results to the message that was deferred.
#[async_trait]
pub trait FollowupClient: Send + Sync {
    async fn edit_original(&self, token: &str, content: &str) -> anyhow::Result<()>;

    async fn delete_original(&self, token: &str) -> anyhow::Result<()>;

    async fn create_followup(&self, token: &str, payload: &MessagePayload) -> anyhow::Result<()>;
}

#[derive(Debug, Clone)]
pub struct DiscordFollowupClient {
    http_client: reqwest::Client,
    root_endpoint: String,
    application_id: String,
}

impl DiscordFollowupClient {
    pub fn new(http_client: reqwest::Client, root_endpoint: &str, application_id: &str) -> Self {
        DiscordFollowupClient {
            http_client,
            root_endpoint: root_endpoint.trim_end_matches('/').to_string(),
            application_id: application_id.to_string(),
        }
    }

    fn endpoint(&self, template: &str, token: &str) -> String {
        let path = template
            .replace("$APPLICATION_ID", &self.application_id)
            .replace("$INTERACTION_TOKEN", token);
        format!("{}{}", self.root_endpoint, path)
    }
}

#[async_trait]
impl FollowupClient for DiscordFollowupClient {
    async fn edit_original(&self, token: &str, content: &str) -> anyhow::Result<()> {
        self.http_client
            .patch(self.endpoint(DISCORD_INTERACTION_EDIT_ENDPOINT, token))
            .json(&serde_json::json!({ "content": content }))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    async fn delete_original(&self, token: &str) -> anyhow::Result<()> {
        self.http_client
            .delete(self.endpoint(DISCORD_INTERACTION_EDIT_ENDPOINT, token))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    async fn create_followup(&self, token: &str, payload: &MessagePayload) -> anyhow::Result<()> {
        self.http_client
            .post(self.endpoint(DISCORD_FOLLOWUP_ENDPOINT, token))
            .json(payload)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
