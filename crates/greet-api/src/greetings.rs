use axum::{
    Form, Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{debug, info};

use greet_db::{Greeting, GreetingFilter};
use greet_types::api::{ClearResponse, GreetRequest, GreetingResponse, SearchQuery};

use crate::error::ApiError;
use crate::state::{AppState, with_db};

fn to_response(row: Greeting) -> GreetingResponse {
    GreetingResponse {
        id: row.id,
        first_name: row.first_name,
        last_name: row.last_name,
        message: row.message,
        timestamp: row.timestamp,
    }
}

fn to_responses(rows: Vec<Greeting>) -> Vec<GreetingResponse> {
    rows.into_iter().map(to_response).collect()
}

pub async fn greet(
    State(state): State<AppState>,
    Form(req): Form<GreetRequest>,
) -> Result<impl IntoResponse, ApiError> {
    debug!("Received first_name: {}, last_name: {}", req.first_name, req.last_name);

    let row = with_db(&state, move |db| {
        db.insert_greeting(&req.first_name, &req.last_name)
    })
    .await?;

    Ok((StatusCode::CREATED, Json(to_response(row))))
}

pub async fn list_greetings(
    State(state): State<AppState>,
) -> Result<Json<Vec<GreetingResponse>>, ApiError> {
    let rows = with_db(&state, |db| db.list_greetings()).await?;
    Ok(Json(to_responses(rows)))
}

pub async fn clear_greetings(
    State(state): State<AppState>,
) -> Result<Json<ClearResponse>, ApiError> {
    let removed = with_db(&state, |db| db.clear_greetings()).await?;
    Ok(Json(ClearResponse { removed }))
}

/// The store lock is released before the response is encoded, so a write
/// may land between the query and the bytes reaching the client.
pub async fn search_greetings(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<GreetingResponse>>, ApiError> {
    let filter = GreetingFilter {
        first_name: query.first_name,
        last_name: query.last_name,
        start_date: query.start_date,
        end_date: query.end_date,
    };

    let rows = with_db(&state, move |db| db.search_greetings(&filter)).await?;
    info!("Search returned {} results", rows.len());
    Ok(Json(to_responses(rows)))
}
