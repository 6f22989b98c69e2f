use axum::{Json, extract::State};

use greet_types::api::HealthResponse;

use crate::error::ApiError;
use crate::state::{AppState, with_db};

pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let greetings = with_db(&state, |db| db.count_greetings()).await?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        greetings,
    }))
}
