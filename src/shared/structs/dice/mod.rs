use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DiceTerm {
    pub count: u32,
    pub sides: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<i64>,
}

impl DiceTerm {
    pub fn new(count: u32, sides: u32) -> Self {
        DiceTerm {
            count,
            sides,
            modifier: None,
        }
    }

    pub fn with_modifier(mut self, modifier: i64) -> Self {
        self.modifier = Some(modifier);
        self
    }
}

/// A parsed dice expression such as `2d6+1d4-3`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RollExpression {
    pub terms: Vec<DiceTerm>,
}

/// Body sent to the roll evaluation service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RollRequest {
    pub dice: RollExpression,
    pub count: u32,
}

impl From<RollExpression> for RollRequest {
    fn from(dice: RollExpression) -> Self {
        RollRequest { dice, count: 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TermOutcome {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub sides: u32,
    #[serde(default)]
    pub modifier: i64,
    pub rolls: Vec<i64>,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RollStep {
    pub rolls: Vec<TermOutcome>,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RollResult {
    pub step: Vec<RollStep>,
}

impl RollResult {
    pub fn first_step(&self) -> Option<&RollStep> {
        self.step.first()
    }
}
