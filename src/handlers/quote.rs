use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{error_type_name, AppError};
use crate::handlers::AppState;
use crate::metrics;
use crate::pricing::{CostBreakdown, QuoteInput};
use crate::presenter::{export_file_name, DisplayRow};

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub breakdown: CostBreakdown,
    pub rows: Vec<DisplayRow>,
    pub summary: String,
}

/// Handle /v1/quotes endpoint
pub async fn create_quote(
    State(state): State<AppState>,
    Json(input): Json<QuoteInput>,
) -> Result<Json<QuoteResponse>, AppError> {
    let breakdown = compute_quote(&state, &input)?;

    Ok(Json(QuoteResponse {
        rows: state.presenter.display_rows(&breakdown),
        summary: state.presenter.summary(&breakdown),
        breakdown,
    }))
}

/// Handle /v1/quotes/export endpoint
/// Returns the quote summary as a downloadable text file
pub async fn export_quote(
    State(state): State<AppState>,
    Json(input): Json<QuoteInput>,
) -> Result<impl IntoResponse, AppError> {
    let breakdown = compute_quote(&state, &input)?;
    let file_name = export_file_name(&breakdown.part_name);
    let disposition = HeaderValue::from_str(&content_disposition(&file_name))
        .map_err(|e| AppError::Internal(format!("Invalid export file name: {}", e)))?;

    metrics::record_export(&breakdown.currency_code);
    info!(file = %file_name, "Quote export generated");

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        state.presenter.summary(&breakdown),
    ))
}

fn compute_quote(state: &AppState, input: &QuoteInput) -> Result<CostBreakdown, AppError> {
    let context = state.context.load();

    match context.quote(input) {
        Ok(breakdown) => {
            metrics::record_quote(&breakdown.currency_code, context.material_label(input));
            Ok(breakdown)
        }
        Err(e) => {
            warn!(error = %e, "Quote request rejected");
            metrics::record_error(error_type_name(&e));
            Err(e)
        }
    }
}

/// `attachment` disposition with an ASCII fallback name and the UTF-8 name
fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| if c.is_ascii() && c != '"' { c } else { '_' })
        .collect();

    let mut encoded = String::with_capacity(file_name.len() * 3);
    for byte in file_name.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'_' | b'-') {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback, encoded
    )
}
