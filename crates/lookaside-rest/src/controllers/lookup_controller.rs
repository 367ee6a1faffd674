//! User lookup controller.
//!
//! The same user can be fetched through the cache or straight from the
//! store; both answer with the view, the elapsed time and where it came
//! from.

use crate::{
    responses::{parse_user_id, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use lookaside_service::UserLookupResponse;
use tracing::debug;

/// Creates the lookup router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cache/:id", get(get_user_cached))
        .route("/db/:id", get(get_user_direct))
}

/// Get a user through the cache.
#[utoipa::path(
    get,
    path = "/cache/{id}",
    tag = "lookup",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found (REDIS_HIT or REDIS_MISS)", body = UserLookupResponse),
        (status = 400, description = "Id is not an integer", body = lookaside_core::ErrorResponse),
        (status = 404, description = "No such user", body = lookaside_core::ErrorResponse),
        (status = 503, description = "Backend unavailable", body = lookaside_core::ErrorResponse)
    )
)]
pub async fn get_user_cached(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<UserLookupResponse> {
    debug!("Cache lookup request: {}", id);

    let user_id = parse_user_id(&id)?;
    let response = state.cache_lookup.get_user(user_id).await?;
    Ok(Json(response))
}

/// Get a user from the store, bypassing the cache.
#[utoipa::path(
    get,
    path = "/db/{id}",
    tag = "lookup",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found (RDB_DIRECT)", body = UserLookupResponse),
        (status = 400, description = "Id is not an integer", body = lookaside_core::ErrorResponse),
        (status = 404, description = "No such user", body = lookaside_core::ErrorResponse),
        (status = 503, description = "Store unavailable", body = lookaside_core::ErrorResponse)
    )
)]
pub async fn get_user_direct(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<UserLookupResponse> {
    debug!("Direct lookup request: {}", id);

    let user_id = parse_user_id(&id)?;
    let response = state.db_lookup.get_user(user_id).await?;
    Ok(Json(response))
}
