pub mod discord_validation;
