use std::sync::Arc;

use crate::shared::USER_AGENT;
use crate::shared::structs::config::Configuration;
use crate::shared::utility::discord::{DiscordFollowupClient, FollowupClient};
use crate::shared::utility::emojify::{Emojifier, HttpEmojifier};
use crate::shared::utility::invocation::{CommandInvoker, HttpCommandInvoker};
use crate::shared::utility::roll::{HttpRollEvaluator, RollEvaluator};

pub mod config;
pub mod dice;
pub mod discord;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub command_invoker: Arc<dyn CommandInvoker>,
    pub followup_client: Arc<dyn FollowupClient>,
    pub roll_evaluator: Arc<dyn RollEvaluator>,
    pub emojifier: Arc<dyn Emojifier>,
}

impl AppState {
    pub fn new(config: Configuration) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(AppState {
            command_invoker: Arc::new(HttpCommandInvoker::new(
                http_client.clone(),
                &config.command_endpoint,
                &config.invocation_secret,
            )),
            followup_client: Arc::new(DiscordFollowupClient::new(
                http_client.clone(),
                &config.discord_root_endpoint,
                &config.application_id,
            )),
            roll_evaluator: Arc::new(HttpRollEvaluator::new(
                http_client.clone(),
                &config.roll_endpoint,
            )),
            emojifier: Arc::new(HttpEmojifier::new(http_client, &config.emojify_endpoint)),
            config,
        })
    }
}
