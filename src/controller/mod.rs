use axum::{Router, middleware::from_fn_with_state, routing::post};

use crate::controller::discord::command::handle_command;
use crate::controller::discord::interaction::handle_interaction;
use crate::shared::middleware::discord_validation::validate_interaction;
use crate::shared::structs::AppState;

pub mod discord;

pub fn router(app_state: AppState) -> Router {
    let interaction_routes = Router::new()
        .route("/api/discord/interaction", post(handle_interaction))
        .route_layer(from_fn_with_state(app_state.clone(), validate_interaction));

    Router::new()
        .merge(interaction_routes)
        .route("/api/discord/command", post(handle_command))
        .with_state(app_state)
}
