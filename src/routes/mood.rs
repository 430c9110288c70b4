use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::mood::{chart_points, MoodChartPoint, CHART_WINDOW, STATS_WINDOW};
use crate::models::{MoodScore, MoodStats};
use crate::types::{CreateMoodRequest, MoodEntryResponse, MoodHistoryQuery};
use crate::AppState;

const DEFAULT_HISTORY_LIMIT: i64 = 30;
const MAX_HISTORY_LIMIT: i64 = 100;

/// Record a mood check-in. Scores outside 1..=10 are rejected before any write.
#[utoipa::path(
    tag = "mood",
    request_body = CreateMoodRequest,
    responses(
        (status = 201, body = MoodEntryResponse),
        (status = 400, description = "Score outside 1..=10"),
        (status = 401, description = "Not signed in"),
    )
)]
#[post("/mood")]
pub async fn create_mood(
    app_state: web::Data<Arc<AppState>>,
    authenticated_user: AuthenticatedUser,
    web::Json(request): web::Json<CreateMoodRequest>,
) -> Result<HttpResponse, ApiError> {
    let score =
        MoodScore::new(request.mood_score).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let notes = request
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|notes| !notes.is_empty());

    let entry = app_state
        .moods
        .insert_mood(&authenticated_user.user_id, score, notes)
        .await?;

    info!(
        "User {} logged mood {}",
        authenticated_user.user_id, entry.mood_score
    );
    Ok(HttpResponse::Created().json(MoodEntryResponse::from(entry)))
}

/// Recent check-ins, newest first.
#[utoipa::path(
    tag = "mood",
    params(("limit" = Option<i64>, Query, description = "Number of entries, 30 by default and at most 100")),
    responses(
        (status = 200, body = Vec<MoodEntryResponse>),
        (status = 401, description = "Not signed in"),
    )
)]
#[get("/mood")]
pub async fn mood_history(
    app_state: web::Data<Arc<AppState>>,
    authenticated_user: AuthenticatedUser,
    query: web::Query<MoodHistoryQuery>,
) -> Result<web::Json<Vec<MoodEntryResponse>>, ApiError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY_LIMIT);

    let entries = app_state
        .moods
        .recent_moods(&authenticated_user.user_id, limit)
        .await?;

    Ok(web::Json(
        entries.into_iter().map(MoodEntryResponse::from).collect(),
    ))
}

/// Average, weekly trend and counts over the latest thirty check-ins.
#[utoipa::path(
    tag = "mood",
    responses(
        (status = 200, body = MoodStats),
        (status = 401, description = "Not signed in"),
    )
)]
#[get("/mood/stats")]
pub async fn mood_stats(
    app_state: web::Data<Arc<AppState>>,
    authenticated_user: AuthenticatedUser,
) -> Result<web::Json<MoodStats>, ApiError> {
    let entries = app_state
        .moods
        .recent_moods(&authenticated_user.user_id, STATS_WINDOW as i64)
        .await?;

    Ok(web::Json(MoodStats::compute(&entries, Utc::now())))
}

#[utoipa::path(
    tag = "mood",
    responses(
        (status = 200, body = Vec<MoodChartPoint>),
        (status = 401, description = "Not signed in"),
    )
)]
#[get("/mood/chart")]
pub async fn mood_chart(
    app_state: web::Data<Arc<AppState>>,
    authenticated_user: AuthenticatedUser,
) -> Result<web::Json<Vec<MoodChartPoint>>, ApiError> {
    let entries = app_state
        .moods
        .recent_moods(&authenticated_user.user_id, CHART_WINDOW as i64)
        .await?;

    Ok(web::Json(chart_points(&entries)))
}
