use async_trait::async_trait;

use crate::shared::structs::dice::{RollRequest, RollResult};

/// Remote dice engine. The bot never generates random numbers itself.
#[async_trait]
pub trait RollEvaluator: Send + Sync {
    async fn evaluate(&self, request: &RollRequest) -> anyhow::Result<RollResult>;
}

#[derive(Debug, Clone)]
pub struct HttpRollEvaluator {
    http_client: reqwest::Client,
    endpoint: String,
}

impl HttpRollEvaluator {
    pub fn new(http_client: reqwest::Client, endpoint: &str) -> Self {
        HttpRollEvaluator {
            http_client,
            endpoint: endpoint.to_string(),
        }
    }
}

#[async_trait]
impl RollEvaluator for HttpRollEvaluator {
    async fn evaluate(&self, request: &RollRequest) -> anyhow::Result<RollResult> {
        let result = self
            .http_client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<RollResult>()
            .await?;

        Ok(result)
    }
}
