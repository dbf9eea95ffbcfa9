//! Favorite folder endpoints.

use axum::Json;
use axum::extract::{Query, State};

use super::filesystem::PathQuery;
use crate::application::{AckResponse, AddFavoriteRequest};
use crate::domain::entities::FavoriteFolder;
use crate::domain::errors::ServiceError;
use crate::presentation::http::AppState;

/// `GET /api/favorites`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<FavoriteFolder>>, ServiceError> {
    state.favorites.list().map(Json)
}

/// `POST /api/favorites`
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddFavoriteRequest>,
) -> Result<Json<AckResponse>, ServiceError> {
    state.favorites.add(request).await?;
    Ok(Json(AckResponse::ok()))
}

/// `DELETE /api/favorites?path=`
pub async fn remove(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Result<Json<AckResponse>, ServiceError> {
    state.favorites.remove(&query.path)?;
    Ok(Json(AckResponse::ok()))
}
