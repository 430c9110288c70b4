use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{query_as, FromRow, PgPool, Type};
use tracing::debug;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "chat_role", rename_all = "lowercase")] // SQL value name
#[serde(rename_all = "lowercase")] // JSON value name
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub session_id: Uuid,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Default for ChatMessage {
    fn default() -> Self {
        ChatMessage {
            id: Uuid::new_v4(),
            session_id: Uuid::nil(),
            role: Role::User,
            content: String::new(),
            created_at: Utc::now(),
        }
    }
}

impl ChatMessage {
    pub fn new(session_id: Uuid, role: Role, content: &str) -> Self {
        ChatMessage {
            session_id,
            role,
            content: content.to_string(),
            ..Default::default()
        }
    }

    /// Appends a message to a session. Messages are never updated afterwards.
    pub async fn append(pool: &PgPool, session_id: Uuid, role: Role, content: &str) -> Result<Self> {
        let message = ChatMessage::new(session_id, role, content);

        let message = query_as::<_, ChatMessage>(
            r#"
            INSERT INTO chat_messages (id, session_id, role, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, session_id, role, content, created_at
            "#,
        )
        .bind(message.id)
        .bind(message.session_id)
        .bind(message.role)
        .bind(&message.content)
        .bind(message.created_at)
        .fetch_one(pool)
        .await?;

        debug!("Message {} appended to session {}", message.id, session_id);
        Ok(message)
    }

    /// Messages of a session in the order they were written
    pub async fn list_by_session_id(pool: &PgPool, session_id: Uuid) -> Result<Vec<Self>> {
        let messages = query_as::<_, ChatMessage>(
            r#"
            SELECT id, session_id, role, content, created_at FROM chat_messages
            WHERE session_id = $1
            ORDER BY created_at ASC, seq ASC
            "#,
        )
        .bind(session_id)
        .fetch_all(pool)
        .await?;

        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), r#""assistant""#);
        assert_eq!(serde_json::from_str::<Role>(r#""user""#).unwrap(), Role::User);
    }

    #[test]
    fn system_role_is_not_a_message_role() {
        assert!(serde_json::from_str::<Role>(r#""system""#).is_err());
    }
}
