use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use crate::chat;
use crate::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::types::{CompletionRequest, CompletionResponse, SendMessageRequest, TurnResponse};
use crate::AppState;

/// Answer a conversation held by the client. Nothing is persisted here.
#[utoipa::path(
    tag = "chat",
    request_body = CompletionRequest,
    responses(
        (status = 200, description = "Assistant reply", body = CompletionResponse),
        (status = 400, description = "No messages were sent"),
        (status = 401, description = "Not signed in, or the session belongs to someone else"),
        (status = 500, description = "The reply could not be generated"),
    )
)]
#[post("/api/chat")]
pub async fn chat_completion(
    app_state: web::Data<Arc<AppState>>,
    authenticated_user: AuthenticatedUser,
    web::Json(request): web::Json<CompletionRequest>,
) -> Result<web::Json<CompletionResponse>, ApiError> {
    let user_id = &authenticated_user.user_id;

    if let Some(session_id) = request.session_id {
        chat::authorize_session(app_state.chats.as_ref(), user_id, session_id)
            .await
            .map_err(retry_later)?;
    }

    // Ensure we have at least one message, else return an error
    if request.messages.is_empty() {
        return Err(ApiError::BadRequest(
            "At least one message is required".to_string(),
        ));
    }

    info!(
        "User {} hit the chat endpoint with {} messages",
        user_id,
        request.messages.len()
    );

    let message = chat::generate_reply(app_state.completion.as_ref(), &request.messages).await?;
    Ok(web::Json(CompletionResponse { message }))
}

/// Send one message in a stored conversation, creating it if needed.
#[utoipa::path(
    tag = "chat",
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Stored turn with the assistant reply", body = TurnResponse),
        (status = 400, description = "Empty message"),
        (status = 401, description = "Not signed in, or the session belongs to someone else"),
        (status = 500, description = "The reply could not be generated"),
    )
)]
#[post("/chat/send")]
pub async fn send_message(
    app_state: web::Data<Arc<AppState>>,
    authenticated_user: AuthenticatedUser,
    web::Json(request): web::Json<SendMessageRequest>,
) -> Result<web::Json<TurnResponse>, ApiError> {
    let turn = chat::send_turn(
        &app_state,
        &authenticated_user,
        &request.content,
        request.session_id,
    )
    .await?;
    Ok(web::Json(turn))
}

// Storage failures on the chat endpoint get the same user-safe text as API failures
fn retry_later(err: ApiError) -> ApiError {
    match err {
        ApiError::Internal(e) => ApiError::Upstream(e),
        other => other,
    }
}
