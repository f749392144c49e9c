use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::shared::structs::config::Configuration;
use crate::shared::structs::dice::{RollRequest, RollResult};
use crate::shared::structs::discord::interaction::VerifiedInteraction;
use crate::shared::structs::discord::response::MessagePayload;
use crate::shared::structs::AppState;
use crate::shared::utility::discord::FollowupClient;
use crate::shared::utility::emojify::Emojifier;
use crate::shared::utility::invocation::CommandInvoker;
use crate::shared::utility::roll::RollEvaluator;

pub const TEST_INVOCATION_SECRET: &str = "test-secret";

pub struct MockRollEvaluator {
    response: Result<serde_json::Value, String>,
    requests: Mutex<Vec<RollRequest>>,
}

impl MockRollEvaluator {
    pub fn returning(response: Result<serde_json::Value, String>) -> Self {
        MockRollEvaluator {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RollRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RollEvaluator for MockRollEvaluator {
    async fn evaluate(&self, request: &RollRequest) -> anyhow::Result<RollResult> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.response {
            Ok(value) => Ok(serde_json::from_value(value.clone())?),
            Err(e) => Err(anyhow::anyhow!(e.clone())),
        }
    }
}

pub struct MockEmojifier {
    pub fail: bool,
    pub messages: Mutex<Vec<String>>,
}

#[async_trait]
impl Emojifier for MockEmojifier {
    async fn emojify(&self, message: &str) -> anyhow::Result<String> {
        self.messages.lock().unwrap().push(message.to_string());
        if self.fail {
            anyhow::bail!("emojify service unavailable");
        }
        Ok(format!("{message} 🎲"))
    }
}

#[derive(Default)]
pub struct MockInvoker {
    pub fail: bool,
    pub invocations: Mutex<Vec<VerifiedInteraction>>,
}

#[async_trait]
impl CommandInvoker for MockInvoker {
    async fn invoke(&self, interaction: &VerifiedInteraction) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("invocation endpoint unreachable");
        }
        self.invocations.lock().unwrap().push(interaction.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowupCall {
    Edit { token: String, content: String },
    Delete { token: String },
    Create { token: String, payload: MessagePayload },
}

#[derive(Default)]
pub struct MockFollowup {
    pub calls: Mutex<Vec<FollowupCall>>,
}

impl MockFollowup {
    pub fn calls(&self) -> Vec<FollowupCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FollowupClient for MockFollowup {
    async fn edit_original(&self, token: &str, content: &str) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(FollowupCall::Edit {
            token: token.to_string(),
            content: content.to_string(),
        });
        Ok(())
    }

    async fn delete_original(&self, token: &str) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(FollowupCall::Delete {
            token: token.to_string(),
        });
        Ok(())
    }

    async fn create_followup(&self, token: &str, payload: &MessagePayload) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(FollowupCall::Create {
            token: token.to_string(),
            payload: payload.clone(),
        });
        Ok(())
    }
}

pub struct TestHarness {
    pub invoker: Arc<MockInvoker>,
    pub followup: Arc<MockFollowup>,
    pub roll_evaluator: Arc<MockRollEvaluator>,
    pub emojifier: Arc<MockEmojifier>,
}

impl TestHarness {
    pub fn new() -> Self {
        TestHarness {
            invoker: Arc::new(MockInvoker::default()),
            followup: Arc::new(MockFollowup::default()),
            roll_evaluator: Arc::new(MockRollEvaluator::returning(Ok(serde_json::json!({
                "step": [
                    { "rolls": [ { "rolls": [3, 5], "modifier": -2, "total": 6 } ], "total": 6 }
                ]
            })))),
            emojifier: Arc::new(MockEmojifier {
                fail: false,
                messages: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn with_invoker(mut self, invoker: MockInvoker) -> Self {
        self.invoker = Arc::new(invoker);
        self
    }

    pub fn with_emojifier(mut self, emojifier: MockEmojifier) -> Self {
        self.emojifier = Arc::new(emojifier);
        self
    }

    pub fn app_state(&self, public_key: &str) -> AppState {
        AppState {
            config: Configuration {
                application_public_key: public_key.to_string(),
                application_id: "1234".into(),
                invocation_secret: TEST_INVOCATION_SECRET.into(),
                roll_endpoint: "http://roll.test".into(),
                emojify_endpoint: "http://emojify.test".into(),
                ..Configuration::new()
            },
            command_invoker: self.invoker.clone(),
            followup_client: self.followup.clone(),
            roll_evaluator: self.roll_evaluator.clone(),
            emojifier: self.emojifier.clone(),
        }
    }
}
