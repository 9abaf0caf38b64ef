use axum::extract::{Path, State};
use axum::Json;

use super::error::{ApiError, ApiResult};
use super::state::AppState;
use crate::auth::{BookingRecord, BookingRequest, LoginRequest, RegisterRequest, UserProfile};
use crate::core::error::YunoError;

// bcrypt hashing is CPU-heavy, so register/login hop off the async reactor.

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<UserProfile> {
    let auth = state.auth.clone();
    let profile = tokio::task::spawn_blocking(move || auth.register(&request))
        .await
        .map_err(|e| ApiError(YunoError::Internal(e.to_string())))??;
    Ok(Json(profile))
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<UserProfile> {
    let auth = state.auth.clone();
    let profile = tokio::task::spawn_blocking(move || auth.login(&request))
        .await
        .map_err(|e| ApiError(YunoError::Internal(e.to_string())))??;
    Ok(Json(profile))
}

pub async fn book(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> ApiResult<BookingRecord> {
    let booking = state.auth.book(&request)?;
    Ok(Json(booking))
}

pub async fn user_bookings(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Vec<BookingRecord>> {
    let bookings = state.auth.bookings(user_id)?;
    Ok(Json(bookings))
}
