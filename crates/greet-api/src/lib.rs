pub mod error;
pub mod greetings;
pub mod health;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Greeting routes. Static assets and middleware layers are added by the
/// server binary.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/greet", post(greetings::greet))
        .route("/greetings", get(greetings::list_greetings))
        .route("/clear", post(greetings::clear_greetings))
        .route("/search", get(greetings::search_greetings))
        .route("/health", get(health::health))
        .with_state(state)
}
