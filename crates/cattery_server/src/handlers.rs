//! Request handlers for the `/cats` routes.
//!
//! Handlers only translate between HTTP and `CatService`; absence is
//! answered with `null` or `[]`, never with an error status.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use cattery_core::{Cat, CatId, OwnerId};
use log::debug;

use crate::error::ApiError;
use crate::routes::AppState;

/// `POST /cats`
pub async fn add_cat(
    State(state): State<AppState>,
    Json(cat): Json<Cat>,
) -> Result<Json<Cat>, ApiError> {
    let saved = state.cats.add_cat(cat)?;
    debug!(
        "event=cat_create module=http status=ok cat_id={:?} owner_id={:?}",
        saved.id,
        saved.owner_id()
    );
    Ok(Json(saved))
}

/// `GET /cats`
pub async fn list_cats(State(state): State<AppState>) -> Result<Json<Vec<Cat>>, ApiError> {
    Ok(Json(state.cats.list_cats()?))
}

/// `GET /cats/{id}`
pub async fn get_cat(
    State(state): State<AppState>,
    Path(id): Path<CatId>,
) -> Result<Json<Option<Cat>>, ApiError> {
    Ok(Json(state.cats.get_cat(id)?))
}

/// `POST /cats/addToOwner`
pub async fn add_cat_to_owner(
    State(state): State<AppState>,
    Json(cat): Json<Cat>,
) -> Result<Json<Cat>, ApiError> {
    let saved = state.cats.add_cat_to_default_owner(cat)?;
    debug!(
        "event=cat_create module=http status=ok route=add_to_owner cat_id={:?} owner_id={:?}",
        saved.id,
        saved.owner_id()
    );
    Ok(Json(saved))
}

/// `GET /cats/owner/{id}`
pub async fn list_cats_by_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<OwnerId>,
) -> Result<Json<Vec<Cat>>, ApiError> {
    Ok(Json(state.cats.list_cats_by_owner(owner_id)?))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "core": cattery_core::ping(),
    }))
}

pub async fn version() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "cattery",
        "version": env!("CARGO_PKG_VERSION"),
        "core_version": cattery_core::core_version(),
    }))
}
