use actix_web::{delete, get, post, put, web, HttpResponse};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::chat::owned_session;
use crate::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::chat::DEFAULT_SESSION_TITLE;
use crate::models::ChatSession;
use crate::types::{SessionWithMessages, UpdateSessionRequest};
use crate::AppState;

const MAX_TITLE_CHARS: usize = 100;

fn session_not_found() -> ApiError {
    ApiError::NotFound("Chat session not found".to_string())
}

/// The caller's sessions, most recently active first.
#[utoipa::path(
    tag = "sessions",
    responses(
        (status = 200, body = Vec<ChatSession>),
        (status = 401, description = "Not signed in"),
    )
)]
#[get("/chat/sessions")]
pub async fn list_sessions(
    app_state: web::Data<Arc<AppState>>,
    authenticated_user: AuthenticatedUser,
) -> Result<web::Json<Vec<ChatSession>>, ApiError> {
    let sessions = app_state
        .chats
        .list_sessions(&authenticated_user.user_id)
        .await?;
    Ok(web::Json(sessions))
}

#[utoipa::path(
    tag = "sessions",
    responses(
        (status = 201, body = ChatSession),
        (status = 401, description = "Not signed in"),
    )
)]
#[post("/chat/sessions")]
pub async fn create_session(
    app_state: web::Data<Arc<AppState>>,
    authenticated_user: AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    let session = app_state
        .chats
        .create_session(&authenticated_user.user_id, DEFAULT_SESSION_TITLE)
        .await?;

    info!(
        "Created chat session {} for user {}",
        session.id, authenticated_user.user_id
    );
    Ok(HttpResponse::Created().json(session))
}

/// A session with its messages in order. Sessions of other users are
/// reported as missing.
#[utoipa::path(
    tag = "sessions",
    params(("session_id" = Uuid, Path, description = "Chat session id")),
    responses(
        (status = 200, body = SessionWithMessages),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "No such session for this user"),
    )
)]
#[get("/chat/sessions/{session_id}")]
pub async fn get_session(
    app_state: web::Data<Arc<AppState>>,
    authenticated_user: AuthenticatedUser,
    session_id: web::Path<Uuid>,
) -> Result<web::Json<SessionWithMessages>, ApiError> {
    let session_id = session_id.into_inner();
    let chats = app_state.chats.as_ref();

    let session = owned_session(chats, &authenticated_user.user_id, session_id)
        .await?
        .ok_or_else(session_not_found)?;
    let messages = chats.list_messages(session.id).await?;

    Ok(web::Json(SessionWithMessages { session, messages }))
}

#[utoipa::path(
    tag = "sessions",
    params(("session_id" = Uuid, Path, description = "Chat session id")),
    request_body = UpdateSessionRequest,
    responses(
        (status = 200, body = ChatSession),
        (status = 400, description = "Title is empty or too long"),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "No such session for this user"),
    )
)]
#[put("/chat/sessions/{session_id}")]
pub async fn rename_session(
    app_state: web::Data<Arc<AppState>>,
    authenticated_user: AuthenticatedUser,
    session_id: web::Path<Uuid>,
    web::Json(request): web::Json<UpdateSessionRequest>,
) -> Result<web::Json<ChatSession>, ApiError> {
    let title = request.title.trim();
    if title.is_empty() || title.chars().count() > MAX_TITLE_CHARS {
        return Err(ApiError::BadRequest(format!(
            "Title must be between 1 and {} characters",
            MAX_TITLE_CHARS
        )));
    }

    let session = app_state
        .chats
        .rename_session(session_id.into_inner(), &authenticated_user.user_id, title)
        .await?
        .ok_or_else(session_not_found)?;

    Ok(web::Json(session))
}

/// Deletes a session and all of its messages.
#[utoipa::path(
    tag = "sessions",
    params(("session_id" = Uuid, Path, description = "Chat session id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "No such session for this user"),
    )
)]
#[delete("/chat/sessions/{session_id}")]
pub async fn delete_session(
    app_state: web::Data<Arc<AppState>>,
    authenticated_user: AuthenticatedUser,
    session_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let session_id = session_id.into_inner();
    let deleted = app_state
        .chats
        .delete_session(session_id, &authenticated_user.user_id)
        .await?;

    if !deleted {
        return Err(session_not_found());
    }

    info!(
        "Deleted chat session {} for user {}",
        session_id, authenticated_user.user_id
    );
    Ok(HttpResponse::NoContent().finish())
}
