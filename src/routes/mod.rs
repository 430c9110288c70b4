use actix_web::{get, web};
use utoipa::OpenApi;

pub mod chat;
pub mod mood;
pub mod resources;
pub mod self_care;
pub mod sessions;
pub mod user;

#[utoipa::path(tag = "health", responses((status = 200, description = "Service is up")))]
#[get("/")]
pub async fn health() -> &'static str {
    "OK"
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calmly API",
        description = "Backend for a youth mental-wellness companion: supportive chat, mood tracking and self-care tools."
    ),
    paths(
        health,
        chat::chat_completion,
        chat::send_message,
        sessions::list_sessions,
        sessions::create_session,
        sessions::get_session,
        sessions::rename_session,
        sessions::delete_session,
        mood::create_mood,
        mood::mood_history,
        mood::mood_stats,
        mood::mood_chart,
        user::get_user,
        user::update_profile,
        self_care::activities,
        self_care::breathing,
        self_care::breathing_at,
        self_care::meditation,
        self_care::meditation_at,
        self_care::create_gratitude,
        self_care::gratitude_history,
        resources::list_resources,
        resources::crisis_lines,
    )
)]
pub struct ApiDoc;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health)
        .service(chat::chat_completion)
        .service(chat::send_message)
        .service(sessions::list_sessions)
        .service(sessions::create_session)
        .service(sessions::get_session)
        .service(sessions::rename_session)
        .service(sessions::delete_session)
        .service(mood::create_mood)
        .service(mood::mood_history)
        .service(mood::mood_stats)
        .service(mood::mood_chart)
        .service(user::get_user)
        .service(user::update_profile)
        .service(self_care::activities)
        .service(self_care::breathing)
        .service(self_care::breathing_at)
        .service(self_care::meditation)
        .service(self_care::meditation_at)
        .service(self_care::create_gratitude)
        .service(self_care::gratitude_history)
        .service(resources::list_resources)
        .service(resources::crisis_lines);
}
