//! Mood catalogue endpoint

use axum::{Json, Router, routing::get};
use diary_core::Mood;
use serde::Serialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/moods", get(list_moods))
}

#[derive(Serialize)]
pub struct MoodInfo {
    pub key: &'static str,
    pub emoji: &'static str,
    pub label: &'static str,
}

/// GET /moods - Moods an entry can be tagged with
async fn list_moods() -> Json<Vec<MoodInfo>> {
    let moods = Mood::ALL
        .into_iter()
        .map(|mood| MoodInfo {
            key: mood.key(),
            emoji: mood.emoji(),
            label: mood.label(),
        })
        .collect();

    Json(moods)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::{send, test_app};

    #[tokio::test]
    async fn lists_all_moods() {
        let (_dir, app) = test_app();

        let (status, body) = send(&app, "GET", "/moods", None).await;

        assert_eq!(status, StatusCode::OK);
        let moods = body.as_array().unwrap();
        assert_eq!(moods.len(), 6);
        assert_eq!(moods[0]["key"], "great");
        assert_eq!(moods[0]["emoji"], "😄");
    }
}
