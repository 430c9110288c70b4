//! Chat turn orchestration: ownership checks, prompt assembly, the single
//! completion call and message persistence.

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::completion::{CompletionClient, PromptMessage};
use crate::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::chat::{title_from_first_message, DEFAULT_SESSION_TITLE};
use crate::models::{ChatMessage, ChatSession, Role};
use crate::prompts::Prompts;
use crate::store::ChatStore;
use crate::types::{ChatTurn, TurnResponse};
use crate::AppState;

/// The safety system prompt followed by the conversation in order.
pub fn build_prompt(history: &[ChatTurn]) -> Vec<PromptMessage> {
    std::iter::once(PromptMessage::System(Prompts::SUPPORT_SYSTEM.to_string()))
        .chain(history.iter().map(|turn| match turn.role {
            Role::User => PromptMessage::User(turn.content.clone()),
            Role::Assistant => PromptMessage::Assistant(turn.content.clone()),
        }))
        .collect()
}

/// Runs one completion over `history`. Empty output becomes the fallback
/// reply; any API failure becomes `ApiError::Upstream`.
pub async fn generate_reply(
    completion: &dyn CompletionClient,
    history: &[ChatTurn],
) -> Result<String, ApiError> {
    let reply = completion
        .complete(build_prompt(history))
        .await
        .map_err(ApiError::Upstream)?;

    match reply {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => {
            warn!("Completion API returned no content, sending fallback reply");
            Ok(Prompts::FALLBACK_REPLY.to_string())
        }
    }
}

/// The session if it exists and belongs to `user_id`.
pub async fn owned_session(
    chats: &dyn ChatStore,
    user_id: &str,
    session_id: Uuid,
) -> Result<Option<ChatSession>, ApiError> {
    let session = chats.get_session(session_id).await?;
    Ok(session.filter(|session| session.is_owned_by(user_id)))
}

/// Like `owned_session`, but a missing or foreign session is an
/// authorization failure.
pub async fn authorize_session(
    chats: &dyn ChatStore,
    user_id: &str,
    session_id: Uuid,
) -> Result<ChatSession, ApiError> {
    owned_session(chats, user_id, session_id).await?.ok_or_else(|| {
        warn!(
            "User {} tried to use chat session {} they do not own",
            user_id, session_id
        );
        ApiError::Unauthorized
    })
}

/// A full turn: resolve or lazily create the session, store the user
/// message, title the session on its first message, ask the model and
/// store the reply.
pub async fn send_turn(
    state: &AppState,
    user: &AuthenticatedUser,
    content: &str,
    session_id: Option<Uuid>,
) -> Result<TurnResponse, ApiError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ApiError::BadRequest("Message content is required".to_string()));
    }

    let chats = state.chats.as_ref();
    let mut session = match session_id {
        Some(session_id) => authorize_session(chats, &user.user_id, session_id).await?,
        None => chats
            .create_session(&user.user_id, DEFAULT_SESSION_TITLE)
            .await?,
    };

    let history = chats.list_messages(session.id).await?;
    let user_message = chats.append_message(session.id, Role::User, content).await?;

    if history.is_empty() {
        let title = title_from_first_message(content);
        if let Some(renamed) = chats
            .rename_session(session.id, &user.user_id, &title)
            .await?
        {
            session = renamed;
        }
    }

    let turns: Vec<ChatTurn> = history
        .iter()
        .chain(std::iter::once(&user_message))
        .map(|message| ChatTurn {
            role: message.role,
            content: message.content.clone(),
        })
        .collect();

    info!(
        "User {} sent a message in session {} ({} prior messages)",
        user.user_id,
        session.id,
        history.len()
    );

    let reply = generate_reply(state.completion.as_ref(), &turns).await?;

    // The reply is returned even if storing it fails
    let assistant_message = match chats
        .append_message(session.id, Role::Assistant, &reply)
        .await
    {
        Ok(message) => message,
        Err(e) => {
            error!("Failed to save assistant message in {}: {:?}", session.id, e);
            ChatMessage::new(session.id, Role::Assistant, &reply)
        }
    };

    if let Err(e) = chats.touch_session(session.id).await {
        error!("Failed to touch chat session {}: {:?}", session.id, e);
    }

    Ok(TurnResponse {
        session_id: session.id,
        title: session.title,
        message: reply,
        user_message,
        assistant_message,
    })
}
