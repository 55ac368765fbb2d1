//! Quotation download handler

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use tracing::info;

use domain_quotation::QuoteRequest;

use crate::dto::quotes::GenerateQuoteRequest;
use crate::{error::ApiError, AppState};

/// Prices the vehicle against every rate card and streams back the PDF
///
/// Fails with 404 when no rate cards exist. Rendering is CPU-bound and
/// runs on the blocking pool.
pub async fn generate_quote(
    State(state): State<AppState>,
    Json(body): Json<GenerateQuoteRequest>,
) -> Result<Response, ApiError> {
    let request = QuoteRequest::from(body).validated()?;
    let cards = state.rate_cards.list_rate_cards().await?;

    let composer = state.composer.clone();
    let renderer = state.renderer.clone();
    let content_type = renderer.content_type();
    let issued_on = Local::now().date_naive();

    let rendered = tokio::task::spawn_blocking(move || {
        composer.compose_and_render(&request, &cards, issued_on, renderer.as_ref())
    })
    .await
    .map_err(|e| ApiError::Internal(format!("quotation task failed: {}", e)))??;

    info!(file = %rendered.file_name, size = rendered.bytes.len(), "Quotation generated");

    let disposition = format!("attachment; filename=\"{}\"", rendered.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        rendered.bytes,
    )
        .into_response())
}
