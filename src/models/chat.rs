use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{query, query_as, FromRow, PgPool};
use tracing::debug;
use utoipa::ToSchema;
use uuid::Uuid;

pub const DEFAULT_SESSION_TITLE: &str = "New Chat";
pub const TITLE_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for ChatSession {
    fn default() -> Self {
        let now = Utc::now();
        ChatSession {
            id: Uuid::new_v4(),
            user_id: String::new(),
            title: DEFAULT_SESSION_TITLE.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Derives a session title from the first user message. Messages longer than
/// fifty characters are cut at fifty and marked with an ellipsis.
pub fn title_from_first_message(message: &str) -> String {
    if message.chars().count() > TITLE_MAX_CHARS {
        let head: String = message.chars().take(TITLE_MAX_CHARS).collect();
        format!("{}...", head)
    } else {
        message.to_string()
    }
}

impl ChatSession {
    pub fn new(user_id: &str) -> Self {
        ChatSession {
            user_id: user_id.to_string(),
            ..Default::default()
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    pub async fn create(pool: &PgPool, user_id: &str, title: &str) -> Result<Self> {
        let session = ChatSession {
            title: title.to_string(),
            ..ChatSession::new(user_id)
        };

        let session = query_as::<_, ChatSession>(
            r#"
            INSERT INTO chat_sessions (id, user_id, title, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(session.id)
        .bind(&session.user_id)
        .bind(&session.title)
        .bind(session.created_at)
        .bind(session.updated_at)
        .fetch_one(pool)
        .await?;

        debug!("Chat session created: {:?}", session);
        Ok(session)
    }

    pub async fn get_by_id(pool: &PgPool, session_id: Uuid) -> Result<Option<Self>> {
        let session = query_as::<_, ChatSession>(
            r#"
            SELECT * FROM chat_sessions
            WHERE id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(pool)
        .await?;

        Ok(session)
    }

    /// All sessions of a user, most recently active first
    pub async fn list_by_user_id(pool: &PgPool, user_id: &str) -> Result<Vec<Self>> {
        let sessions = query_as::<_, ChatSession>(
            r#"
            SELECT * FROM chat_sessions
            WHERE user_id = $1
            ORDER BY updated_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(sessions)
    }

    pub async fn update_title(
        pool: &PgPool,
        session_id: Uuid,
        user_id: &str,
        title: &str,
    ) -> Result<Option<Self>> {
        let session = query_as::<_, ChatSession>(
            r#"
            UPDATE chat_sessions
            SET title = $1, updated_at = $2
            WHERE id = $3 AND user_id = $4
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(Utc::now())
        .bind(session_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        debug!("Chat session retitled: {:?}", session);
        Ok(session)
    }

    pub async fn touch(pool: &PgPool, session_id: Uuid) -> Result<()> {
        query(
            r#"
            UPDATE chat_sessions
            SET updated_at = $1
            WHERE id = $2
            "#,
        )
        .bind(Utc::now())
        .bind(session_id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Deletes a session and, through the foreign key, its messages.
    /// Returns false when nothing owned by `user_id` matched.
    pub async fn delete(pool: &PgPool, session_id: Uuid, user_id: &str) -> Result<bool> {
        let result = query(
            r#"
            DELETE FROM chat_sessions
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(session_id)
        .bind(user_id)
        .execute(pool)
        .await?;

        debug!("Chat session deleted with id: {:?}", session_id);
        Ok(result.rows_affected() > 0)
    }
}
