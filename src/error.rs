use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application error types
///
/// The pricing engine itself never fails; these cover the layers around it.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
    /// Requested material is not in the catalog
    #[error("Unknown material '{id}' (available: {available})")]
    UnknownMaterial { id: String, available: String },
    /// Writing the quote export failed
    #[error("Export failed for {path}: {source}")]
    Export {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UnknownMaterial { .. } => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::Export { .. } | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "type": error_type_name(&self),
            }
        }));

        (status, body).into_response()
    }
}

pub fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::Config(_) => "config_error",
        AppError::UnknownMaterial { .. } => "unknown_material",
        AppError::Export { .. } => "export_error",
        AppError::Internal(_) => "internal_error",
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
