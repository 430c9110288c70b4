use actix_web::{get, post, web, HttpResponse};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::gratitude::{GratitudeAnswers, GRATITUDE_PROMPTS};
use crate::models::GratitudeEntry;
use crate::self_care::{
    breathing_state_at, cycle_seconds, meditation_state_at, Activity, BreathingState,
    BreathingStep, GuidedStep, MeditationPreset, MeditationState, ACTIVITIES, BREATHING_PATTERN,
    GUIDED_STEPS, MEDITATION_PRESETS,
};
use crate::types::{BreathingQuery, CreateGratitudeRequest, MeditationQuery};
use crate::AppState;

const GRATITUDE_HISTORY_LIMIT: i64 = 30;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BreathingGuide {
    pub pattern: Vec<BreathingStep>,
    pub cycle_seconds: u64,
}

#[derive(Serialize, ToSchema)]
pub struct MeditationGuide {
    pub presets: Vec<MeditationPreset>,
    pub steps: Vec<GuidedStep>,
}

#[derive(Serialize, ToSchema)]
pub struct GratitudeHistory {
    pub prompts: Vec<&'static str>,
    pub entries: Vec<GratitudeEntry>,
}

#[utoipa::path(tag = "self-care", responses((status = 200, body = Vec<Activity>)))]
#[get("/self-care/activities")]
pub async fn activities() -> web::Json<Vec<Activity>> {
    web::Json(ACTIVITIES.to_vec())
}

/// The 4-7-8 breathing pattern.
#[utoipa::path(tag = "self-care", responses((status = 200, body = BreathingGuide)))]
#[get("/self-care/breathing")]
pub async fn breathing() -> web::Json<BreathingGuide> {
    web::Json(BreathingGuide {
        pattern: BREATHING_PATTERN.to_vec(),
        cycle_seconds: cycle_seconds(),
    })
}

/// Phase and cycle after `elapsed` seconds of breathing.
#[utoipa::path(
    tag = "self-care",
    params(("elapsed" = u64, Query, description = "Seconds since the exercise started")),
    responses(
        (status = 200, body = BreathingState),
        (status = 400, description = "Missing or invalid elapsed time"),
    )
)]
#[get("/self-care/breathing/at")]
pub async fn breathing_at(query: web::Query<BreathingQuery>) -> web::Json<BreathingState> {
    web::Json(breathing_state_at(query.elapsed))
}

#[utoipa::path(tag = "self-care", responses((status = 200, body = MeditationGuide)))]
#[get("/self-care/meditation")]
pub async fn meditation() -> web::Json<MeditationGuide> {
    web::Json(MeditationGuide {
        presets: MEDITATION_PRESETS.to_vec(),
        steps: GUIDED_STEPS.to_vec(),
    })
}

/// Guidance and remaining time of a meditation session.
#[utoipa::path(
    tag = "self-care",
    params(
        ("duration" = u32, Query, description = "Preset length in minutes"),
        ("elapsed" = u64, Query, description = "Seconds since the session started"),
    ),
    responses(
        (status = 200, body = MeditationState),
        (status = 400, description = "Duration is not one of the presets"),
    )
)]
#[get("/self-care/meditation/at")]
pub async fn meditation_at(
    query: web::Query<MeditationQuery>,
) -> Result<web::Json<MeditationState>, ApiError> {
    meditation_state_at(query.duration, query.elapsed)
        .map(web::Json)
        .ok_or_else(|| {
            ApiError::BadRequest(format!(
                "Unsupported meditation length: {} minutes",
                query.duration
            ))
        })
}

/// Save today's three gratitude answers.
#[utoipa::path(
    tag = "self-care",
    request_body = CreateGratitudeRequest,
    responses(
        (status = 201, body = GratitudeEntry),
        (status = 400, description = "Not exactly three non-empty answers"),
        (status = 401, description = "Not signed in"),
    )
)]
#[post("/self-care/gratitude")]
pub async fn create_gratitude(
    app_state: web::Data<Arc<AppState>>,
    authenticated_user: AuthenticatedUser,
    web::Json(request): web::Json<CreateGratitudeRequest>,
) -> Result<HttpResponse, ApiError> {
    let answers =
        GratitudeAnswers::new(&request.entries).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let entry = app_state
        .gratitude
        .insert_gratitude(&authenticated_user.user_id, answers)
        .await?;

    info!("User {} saved a gratitude entry", authenticated_user.user_id);
    Ok(HttpResponse::Created().json(entry))
}

#[utoipa::path(
    tag = "self-care",
    responses(
        (status = 200, body = GratitudeHistory),
        (status = 401, description = "Not signed in"),
    )
)]
#[get("/self-care/gratitude")]
pub async fn gratitude_history(
    app_state: web::Data<Arc<AppState>>,
    authenticated_user: AuthenticatedUser,
) -> Result<web::Json<GratitudeHistory>, ApiError> {
    let entries = app_state
        .gratitude
        .recent_gratitude(&authenticated_user.user_id, GRATITUDE_HISTORY_LIMIT)
        .await?;

    Ok(web::Json(GratitudeHistory {
        prompts: GRATITUDE_PROMPTS.to_vec(),
        entries,
    }))
}
