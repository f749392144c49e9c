//! Dice notation such as `2d6+1d4-3`.
//!
//! ```text
//! expr := dice ('+'|'-' int)? ( '+' dice ('+'|'-' int)? )*
//! dice := int 'd' int
//! int  := [1-9][0-9]*
//! ```
//!
//! Whitespace may surround the operators and the whole expression but never
//! splits a number or a dice group. The raw string is matched against the grammar
//! before it is normalized and split into terms, so the tokenizer only ever sees
//! valid input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::error::NotationError;
use crate::shared::structs::discord::response::MessagePayload;
use crate::shared::structs::dice::{DiceTerm, RollExpression, RollRequest, RollStep};
use crate::shared::utility::roll::RollEvaluator;
use crate::shared::{NOTATION_REJECTED_MESSAGE, ROLL_FAILED_MESSAGE};

static EXPRESSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^\s*[1-9][0-9]*d[1-9][0-9]*\s*",
        r"([+-]\s*[1-9][0-9]*\s*)?",
        r"(\+\s*[1-9][0-9]*d[1-9][0-9]*\s*([+-]\s*[1-9][0-9]*\s*)?)*$",
    ))
    .expect("dice expression pattern is valid")
});

static DICE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([1-9][0-9]*)d([1-9][0-9]*)$").expect("dice group pattern is valid")
});

fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

fn parse_number<T: std::str::FromStr>(token: &str) -> Result<T, NotationError> {
    token
        .parse::<T>()
        .map_err(|_| NotationError::OutOfRange(token.to_string()))
}

pub fn parse(raw: &str) -> Result<RollExpression, NotationError> {
    if !EXPRESSION_PATTERN.is_match(raw) {
        return Err(NotationError::Unrecognized(raw.to_string()));
    }
    let normalized = normalize(raw);

    let is_delimiter = |c: char| c == '+' || c == '-';
    let delimiters: Vec<char> = normalized.chars().filter(|c| is_delimiter(*c)).collect();
    let mut terms: Vec<DiceTerm> = Vec::new();

    for (index, token) in normalized.split(is_delimiter).enumerate() {
        if let Some(captures) = DICE_PATTERN.captures(token) {
            terms.push(DiceTerm::new(
                parse_number(&captures[1])?,
                parse_number(&captures[2])?,
            ));
            continue;
        }

        // The grammar guarantees a bare integer follows a dice group and a delimiter.
        let sign = match index.checked_sub(1).and_then(|i| delimiters.get(i)) {
            Some('-') => "-",
            _ => "",
        };
        let modifier = parse_number::<i64>(&format!("{sign}{token}"))?;
        match terms.pop() {
            Some(term) => terms.push(term.with_modifier(modifier)),
            None => return Err(NotationError::Unrecognized(raw.to_string())),
        }
    }

    Ok(RollExpression { terms })
}

pub fn format(step: &RollStep) -> String {
    let parts = step
        .rolls
        .iter()
        .map(|outcome| {
            let rolls = outcome
                .rolls
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(") + (");
            let mut part = format!("({rolls})");
            match outcome.modifier {
                0 => {}
                m if m > 0 => part.push_str(&format!(" + {m}")),
                m => part.push_str(&format!(" - {}", m.unsigned_abs())),
            }
            part
        })
        .collect::<Vec<_>>();

    format!("{} = {}", parts.join(" + "), step.total)
}

/// Parses, evaluates and formats a roll. Never fails: every problem becomes
/// an ephemeral chat message.
pub async fn roll(raw: &str, evaluator: &dyn RollEvaluator) -> MessagePayload {
    let expression = match parse(raw) {
        Ok(expression) => expression,
        Err(e) => {
            tracing::debug!("{}", e);
            return MessagePayload::ephemeral(NOTATION_REJECTED_MESSAGE);
        }
    };

    let request = RollRequest::from(expression);
    match evaluator.evaluate(&request).await {
        Ok(result) => match result.first_step() {
            Some(step) => MessagePayload::public(format(step)),
            None => {
                tracing::error!("Roll evaluation returned no steps for {:?}", &request);
                MessagePayload::ephemeral(ROLL_FAILED_MESSAGE)
            }
        },
        Err(e) => {
            let error_msg = format!("Failed to evaluate roll: {e:?}");
            tracing::error!("{}", &error_msg);
            MessagePayload::ephemeral(ROLL_FAILED_MESSAGE)
        }
    }
}
