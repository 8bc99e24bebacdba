use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use color_core::ParseColorError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidColor(#[from] ParseColorError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidColor(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Failure to load a catalog at startup. The server does not start.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {catalog} from {source_name}: {error}")]
    Read {
        catalog: &'static str,
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    #[error("Malformed catalog {catalog} in {source_name}: {error}")]
    Parse {
        catalog: &'static str,
        source_name: String,
        #[source]
        error: serde_json::Error,
    },
}
