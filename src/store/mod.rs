//! Repository seams over the managed Postgres backend.
//!
//! Handlers only see these traits. `postgres::PgStore` implements all of them
//! against a shared pool; tests use the in-memory store.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::gratitude::GratitudeAnswers;
use crate::models::{ChatMessage, ChatSession, GratitudeEntry, MoodEntry, MoodScore, Profile, Role};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

#[async_trait]
pub trait ChatStore: Send + Sync {
    async fn create_session(&self, user_id: &str, title: &str) -> Result<ChatSession>;

    async fn get_session(&self, session_id: Uuid) -> Result<Option<ChatSession>>;

    /// Sessions of `user_id`, most recently updated first.
    async fn list_sessions(&self, user_id: &str) -> Result<Vec<ChatSession>>;

    /// Sets the title and bumps `updated_at`. `None` when the session does
    /// not exist or belongs to someone else.
    async fn rename_session(
        &self,
        session_id: Uuid,
        user_id: &str,
        title: &str,
    ) -> Result<Option<ChatSession>>;

    async fn touch_session(&self, session_id: Uuid) -> Result<()>;

    async fn delete_session(&self, session_id: Uuid, user_id: &str) -> Result<bool>;

    async fn append_message(&self, session_id: Uuid, role: Role, content: &str)
        -> Result<ChatMessage>;

    /// Messages of a session, oldest first.
    async fn list_messages(&self, session_id: Uuid) -> Result<Vec<ChatMessage>>;
}

#[async_trait]
pub trait MoodStore: Send + Sync {
    async fn insert_mood(
        &self,
        user_id: &str,
        score: MoodScore,
        notes: Option<&str>,
    ) -> Result<MoodEntry>;

    /// Latest entries of `user_id`, newest first.
    async fn recent_moods(&self, user_id: &str, limit: i64) -> Result<Vec<MoodEntry>>;
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>>;

    async fn upsert_profile(
        &self,
        user_id: &str,
        email: Option<&str>,
        display_name: &str,
        age: i16,
    ) -> Result<Profile>;
}

#[async_trait]
pub trait GratitudeStore: Send + Sync {
    async fn insert_gratitude(&self, user_id: &str, answers: GratitudeAnswers)
        -> Result<GratitudeEntry>;

    async fn recent_gratitude(&self, user_id: &str, limit: i64) -> Result<Vec<GratitudeEntry>>;
}
