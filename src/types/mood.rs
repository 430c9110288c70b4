use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::mood::{mood_label, MoodEntry};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMoodRequest {
    pub mood_score: i64,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MoodHistoryQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntryResponse {
    #[serde(flatten)]
    pub entry: MoodEntry,
    pub label: String,
}

impl From<MoodEntry> for MoodEntryResponse {
    fn from(entry: MoodEntry) -> Self {
        let label = mood_label(entry.mood_score).to_string();
        MoodEntryResponse { entry, label }
    }
}
