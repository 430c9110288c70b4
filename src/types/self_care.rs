use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateGratitudeRequest {
    pub entries: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct BreathingQuery {
    pub elapsed: u64,
}

#[derive(Debug, Deserialize)]
pub struct MeditationQuery {
    pub duration: u32,
    pub elapsed: u64,
}

#[derive(Debug, Deserialize)]
pub struct ResourceQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}
