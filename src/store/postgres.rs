use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{ChatStore, GratitudeStore, MoodStore, ProfileStore};
use crate::models::gratitude::GratitudeAnswers;
use crate::models::{ChatMessage, ChatSession, GratitudeEntry, MoodEntry, MoodScore, Profile, Role};

/// Every store backed by one connection pool. Queries live on the models.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatStore for PgStore {
    async fn create_session(&self, user_id: &str, title: &str) -> Result<ChatSession> {
        ChatSession::create(&self.pool, user_id, title).await
    }

    async fn get_session(&self, session_id: Uuid) -> Result<Option<ChatSession>> {
        ChatSession::get_by_id(&self.pool, session_id).await
    }

    async fn list_sessions(&self, user_id: &str) -> Result<Vec<ChatSession>> {
        ChatSession::list_by_user_id(&self.pool, user_id).await
    }

    async fn rename_session(
        &self,
        session_id: Uuid,
        user_id: &str,
        title: &str,
    ) -> Result<Option<ChatSession>> {
        ChatSession::update_title(&self.pool, session_id, user_id, title).await
    }

    async fn touch_session(&self, session_id: Uuid) -> Result<()> {
        ChatSession::touch(&self.pool, session_id).await
    }

    async fn delete_session(&self, session_id: Uuid, user_id: &str) -> Result<bool> {
        ChatSession::delete(&self.pool, session_id, user_id).await
    }

    async fn append_message(
        &self,
        session_id: Uuid,
        role: Role,
        content: &str,
    ) -> Result<ChatMessage> {
        ChatMessage::append(&self.pool, session_id, role, content).await
    }

    async fn list_messages(&self, session_id: Uuid) -> Result<Vec<ChatMessage>> {
        ChatMessage::list_by_session_id(&self.pool, session_id).await
    }
}

#[async_trait]
impl MoodStore for PgStore {
    async fn insert_mood(
        &self,
        user_id: &str,
        score: MoodScore,
        notes: Option<&str>,
    ) -> Result<MoodEntry> {
        MoodEntry::insert(&self.pool, user_id, score, notes).await
    }

    async fn recent_moods(&self, user_id: &str, limit: i64) -> Result<Vec<MoodEntry>> {
        MoodEntry::recent(&self.pool, user_id, limit).await
    }
}

#[async_trait]
impl ProfileStore for PgStore {
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>> {
        Profile::get(&self.pool, user_id).await
    }

    async fn upsert_profile(
        &self,
        user_id: &str,
        email: Option<&str>,
        display_name: &str,
        age: i16,
    ) -> Result<Profile> {
        Profile::upsert(&self.pool, user_id, email, display_name, age).await
    }
}

#[async_trait]
impl GratitudeStore for PgStore {
    async fn insert_gratitude(
        &self,
        user_id: &str,
        answers: GratitudeAnswers,
    ) -> Result<GratitudeEntry> {
        GratitudeEntry::insert(&self.pool, user_id, answers).await
    }

    async fn recent_gratitude(&self, user_id: &str, limit: i64) -> Result<Vec<GratitudeEntry>> {
        GratitudeEntry::recent(&self.pool, user_id, limit).await
    }
}
