//! Registration and login handlers

use std::str::FromStr;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use domain_account::{Registration, Role};

use crate::dto::accounts::*;
use crate::{error::ApiError, AppState};

/// Creates an account
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let role = match request.role.as_deref() {
        Some(role) => Role::from_str(role)?,
        None => Role::default(),
    };

    let registration =
        Registration::new(request.username, request.email, request.password).with_role(role);
    state.accounts.register(registration).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            msg: "User created successfully".to_string(),
        }),
    ))
}

/// Verifies credentials and returns the account profile
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    request.validate()?;

    let account = state
        .accounts
        .authenticate(&request.email, &request.password)
        .await?;

    Ok(Json(account.into()))
}
