use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A required caller-supplied field was missing or blank.
    #[error("{field} is required")]
    InvalidInput { field: &'static str },

    /// A date filter was not in `YYYY-MM-DD` form.
    #[error("invalid {field} '{value}': expected YYYY-MM-DD")]
    InvalidFilter { field: &'static str, value: String },

    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl StoreError {
    /// True for errors the caller caused and can fix by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::InvalidFilter { .. })
    }
}
