//! Directory browsing, file streaming and fonts.

use axum::Json;
use axum::extract::{Query, Request, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::domain::entities::{DirectoryListing, Drive, FontEntry};
use crate::domain::errors::ServiceError;
use crate::infrastructure::filesystem;
use crate::presentation::http::AppState;

/// `?path=` query.
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    /// Filesystem path as typed by the user.
    #[serde(default)]
    pub path: String,
}

/// `GET /api/browse?path=`
pub async fn browse(
    Query(query): Query<PathQuery>,
) -> Result<Json<DirectoryListing>, ServiceError> {
    filesystem::browse(&query.path).await.map(Json)
}

/// `GET /api/drives`
pub async fn drives() -> Json<Vec<Drive>> {
    Json(filesystem::drives())
}

/// `GET /api/file?path=`
pub async fn file(
    Query(query): Query<PathQuery>,
    request: Request,
) -> Result<Response, ServiceError> {
    let path = filesystem::resolve_file(&query.path).await?;

    match ServeFile::new(path).oneshot(request).await {
        Ok(response) => Ok(response.into_response()),
        Err(never) => match never {},
    }
}

/// `GET /api/fonts`
pub async fn fonts(State(state): State<AppState>) -> Json<Vec<FontEntry>> {
    Json(filesystem::scan_fonts(&state.fonts_dir).await)
}
