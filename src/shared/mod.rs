pub mod error;
pub mod middleware;
pub mod structs;
pub mod utility;

#[cfg(test)]
pub mod test_support;

pub const USER_AGENT: &str = concat!(
    "DiscordBot (https://github.com/dice-herald/dice-herald, ",
    env!("CARGO_PKG_VERSION"),
    ")"
);

pub const DISCORD_ROOT_ENDPOINT: &str = "https://discord.com/api/v10";
pub const DISCORD_INTERACTION_EDIT_ENDPOINT: &str =
    "/webhooks/$APPLICATION_ID/$INTERACTION_TOKEN/messages/@original";
pub const DISCORD_FOLLOWUP_ENDPOINT: &str = "/webhooks/$APPLICATION_ID/$INTERACTION_TOKEN";

pub const INVOCATION_SECRET_HEADER: &str = "x-invocation-secret";
pub const INVOCATION_ID_HEADER: &str = "x-invocation-id";

pub const MALFORMED_COMMAND_MESSAGE: &str = "Something went wrong.";
pub const UNKNOWN_COMMAND_MESSAGE: &str = "Unknown slash command";
pub const NOTATION_REJECTED_MESSAGE: &str = "Sorry bud, I don't know how to roll that...";
pub const ROLL_FAILED_MESSAGE: &str = "That roll is messed up...";
