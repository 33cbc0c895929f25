pub mod entries;
pub mod moods;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use diary_core::DiaryError;
use serde::Serialize;
use tracing::error;

use crate::state::AppState;

/// All API routes, without middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(entries::router())
        .merge(moods::router())
        .with_state(state)
}

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Convert anyhow errors to HTTP responses.
///
/// Bad dates and moods from the client are 400s, tagging a missing entry is a
/// 404, and everything else is a 500.
pub struct AppError {
    status: StatusCode,
    error: anyhow::Error,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!("{:#}", self.error);
        }

        let body = Json(ErrorResponse {
            error: self.error.to_string(),
        });
        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let error = err.into();
        let status = match error.downcast_ref::<DiaryError>() {
            Some(DiaryError::InvalidDate(_) | DiaryError::UnknownMood(_)) => {
                StatusCode::BAD_REQUEST
            }
            Some(DiaryError::NoEntry(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        AppError { status, error }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use diary_core::Diary;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::state::AppState;

    pub fn test_app() -> (TempDir, Router) {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(Diary::at(dir.path().join("my_diaries"))).unwrap();
        (dir, super::app(state))
    }

    pub async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }
}
