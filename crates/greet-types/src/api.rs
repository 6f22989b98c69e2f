use serde::{Deserialize, Serialize};

// -- Greetings --

/// Form body of `POST /greet`. Missing fields deserialize as empty and are
/// rejected by the store's own validation.
#[derive(Debug, Default, Deserialize)]
pub struct GreetRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub message: String,
    pub timestamp: String,
}

// -- Search --

/// Query string of `GET /search`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

// -- Maintenance --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearResponse {
    pub removed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub greetings: u64,
}

/// Body of every 4xx/5xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
