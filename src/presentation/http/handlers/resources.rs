//! HoYo resource endpoints.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::application::{ResourceResponse, RetryImageResponse};
use crate::domain::entities::SourceKey;
use crate::domain::errors::ServiceError;
use crate::presentation::http::AppState;

/// `?source=` query.
#[derive(Debug, Deserialize)]
pub struct SourceQuery {
    /// Source key, e.g. `hsr_characters`.
    #[serde(default)]
    pub source: String,
}

/// `?game=` query of the legacy characters endpoint.
#[derive(Debug, Deserialize)]
pub struct GameQuery {
    /// Game tag.
    #[serde(default)]
    pub game: String,
}

/// `?source=&name=` query of the image retry endpoint.
#[derive(Debug, Deserialize)]
pub struct RetryQuery {
    /// Source key.
    #[serde(default)]
    pub source: String,
    /// Item name as listed in the snapshot.
    #[serde(default)]
    pub name: String,
}

/// `GET /api/hoyo/resources?source=`
pub async fn resources(
    State(state): State<AppState>,
    Query(query): Query<SourceQuery>,
) -> Result<Json<ResourceResponse>, ServiceError> {
    let source: SourceKey = query.source.parse()?;
    state.resources.execute(source).await.map(Json)
}

/// Older pages request characters by game tag.
pub async fn characters(
    State(state): State<AppState>,
    Query(query): Query<GameQuery>,
) -> Result<Json<ResourceResponse>, ServiceError> {
    let source = SourceKey::characters_of(&query.game)?;
    state.resources.execute(source).await.map(Json)
}

/// `GET /api/hoyo/refresh?source=`
pub async fn refresh(
    State(state): State<AppState>,
    Query(query): Query<SourceQuery>,
) -> Result<Json<ResourceResponse>, ServiceError> {
    let source: SourceKey = query.source.parse()?;
    state.resources.refresh(source).await.map(Json)
}

/// `GET /api/hoyo/retry_image?source=&name=`
pub async fn retry_image(
    State(state): State<AppState>,
    Query(query): Query<RetryQuery>,
) -> Result<Json<RetryImageResponse>, ServiceError> {
    let source: SourceKey = query.source.parse()?;
    state.retry.execute(source, &query.name).await.map(Json)
}
