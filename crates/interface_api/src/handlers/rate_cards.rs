//! Rate card (product) handlers

use axum::{extract::State, Json};

use crate::dto::rate_cards::*;
use crate::{error::ApiError, AppState};

/// Lists every rate card in storage order
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let cards = state.rate_cards.list_rate_cards().await?;
    Ok(Json(cards.into_iter().map(ProductResponse::from).collect()))
}

/// Creates or fully overwrites the rate card for one company
pub async fn update_product(
    State(state): State<AppState>,
    Json(request): Json<ProductRequest>,
) -> Result<Json<ProductUpdatedResponse>, ApiError> {
    let upsert = request.into_upsert().validated()?;
    let card = state.rate_cards.upsert_rate_card(upsert).await?;

    Ok(Json(ProductUpdatedResponse {
        status: "success".to_string(),
        company: card.company_name,
    }))
}
