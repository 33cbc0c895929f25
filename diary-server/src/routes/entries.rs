//! Diary entry endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use chrono::NaiveDate;
use diary_core::{Entry, Feedback, Mood, parse_date};
use serde::{Deserialize, Serialize};

use crate::routes::AppError;
use crate::state::AppState;

/// Characters of entry text included in list responses.
const PREVIEW_CHARS: usize = 80;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/entries", get(list_entries))
        .route("/entries/{date}", get(get_entry).put(save_entry))
        .route("/entries/{date}/mood", put(set_mood))
}

/// Entry info returned by the list endpoint
#[derive(Serialize)]
pub struct EntrySummary {
    pub date: NaiveDate,
    pub mood: Option<Mood>,
    pub preview: String,
}

/// GET /entries - List saved entries, newest first
async fn list_entries(State(state): State<AppState>) -> Result<Json<Vec<EntrySummary>>, AppError> {
    let store = state.store()?;

    let entries = store
        .entries()?
        .into_iter()
        .map(|entry| EntrySummary {
            date: entry.date,
            mood: entry.mood,
            preview: entry.preview(PREVIEW_CHARS),
        })
        .collect();

    Ok(Json(entries))
}

#[derive(Serialize)]
pub struct EntryResponse {
    #[serde(flatten)]
    pub entry: Entry,
    /// Whether a file exists for this date, even an empty one
    pub exists: bool,
}

/// GET /entries/:date - Read one entry (empty content when none was written)
async fn get_entry(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<EntryResponse>, AppError> {
    let date = parse_date(&date)?;
    let store = state.store()?;

    Ok(Json(EntryResponse {
        entry: store.entry(date)?,
        exists: store.contains(date),
    }))
}

/// Request body for saving an entry
#[derive(Deserialize)]
pub struct SaveEntryRequest {
    pub content: String,
    /// Mood key; the current mood is kept when omitted
    #[serde(default)]
    pub mood: Option<String>,
}

#[derive(Serialize)]
pub struct FeedbackInfo {
    pub kind: Feedback,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct SaveEntryResponse {
    pub entry: Entry,
    pub feedback: FeedbackInfo,
}

/// PUT /entries/:date - Write or replace an entry
async fn save_entry(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(req): Json<SaveEntryRequest>,
) -> Result<Json<SaveEntryResponse>, AppError> {
    let date = parse_date(&date)?;
    let mood = req.mood.as_deref().map(str::parse::<Mood>).transpose()?;
    let store = state.store()?;

    store.save(date, &req.content)?;
    if let Some(mood) = mood {
        store.set_mood(date, Some(mood))?;
    }

    let feedback = Feedback::for_content(&req.content);

    Ok(Json(SaveEntryResponse {
        entry: store.entry(date)?,
        feedback: FeedbackInfo {
            kind: feedback,
            message: feedback.message(),
        },
    }))
}

/// Request body for setting a mood; `null` clears it
#[derive(Deserialize)]
pub struct SetMoodRequest {
    pub mood: Option<String>,
}

/// PUT /entries/:date/mood - Set or clear the mood of an entry
async fn set_mood(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(req): Json<SetMoodRequest>,
) -> Result<Json<Entry>, AppError> {
    let date = parse_date(&date)?;
    let mood = req.mood.as_deref().map(str::parse::<Mood>).transpose()?;
    let store = state.store()?;

    store.set_mood(date, mood)?;

    Ok(Json(store.entry(date)?))
}
