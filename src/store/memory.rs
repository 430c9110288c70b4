use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{ChatStore, GratitudeStore, MoodStore, ProfileStore};
use crate::models::gratitude::GratitudeAnswers;
use crate::models::{ChatMessage, ChatSession, GratitudeEntry, MoodEntry, MoodScore, Profile, Role};

#[derive(Default)]
struct Tables {
    sessions: Vec<ChatSession>,
    messages: Vec<ChatMessage>,
    moods: Vec<MoodEntry>,
    profiles: Vec<Profile>,
    gratitude: Vec<GratitudeEntry>,
}

/// In-process stand-in for Postgres with the same ordering rules.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    writes: AtomicUsize,
    failures: Failures,
}

/// Operations that can be switched to fail, one at a time.
#[derive(Default)]
struct Failures {
    session_lookups: AtomicBool,
    assistant_messages: AtomicBool,
    touches: AtomicBool,
}

fn injected(flag: &AtomicBool, operation: &str) -> Result<()> {
    if flag.load(Ordering::SeqCst) {
        anyhow::bail!("simulated storage failure in {}", operation);
    }
    Ok(())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful inserts, updates and deletes so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn fail_session_lookups(&self) {
        self.failures.session_lookups.store(true, Ordering::SeqCst);
    }

    /// Only assistant replies fail to save; user messages still go through.
    pub fn fail_assistant_messages(&self) {
        self.failures.assistant_messages.store(true, Ordering::SeqCst);
    }

    pub fn fail_touches(&self) {
        self.failures.touches.store(true, Ordering::SeqCst);
    }

    pub async fn sessions(&self) -> Vec<ChatSession> {
        self.tables.lock().await.sessions.clone()
    }

    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.tables.lock().await.messages.clone()
    }

    /// Inserts a mood entry with a fixed timestamp.
    pub async fn seed_mood(&self, entry: MoodEntry) {
        self.tables.lock().await.moods.push(entry);
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ChatStore for MemoryStore {
    async fn create_session(&self, user_id: &str, title: &str) -> Result<ChatSession> {
        self.record_write();
        let session = ChatSession {
            title: title.to_string(),
            ..ChatSession::new(user_id)
        };
        self.tables.lock().await.sessions.push(session.clone());
        Ok(session)
    }

    async fn get_session(&self, session_id: Uuid) -> Result<Option<ChatSession>> {
        injected(&self.failures.session_lookups, "get_session")?;
        let tables = self.tables.lock().await;
        Ok(tables.sessions.iter().find(|s| s.id == session_id).cloned())
    }

    async fn list_sessions(&self, user_id: &str) -> Result<Vec<ChatSession>> {
        let tables = self.tables.lock().await;
        let mut sessions: Vec<ChatSession> = tables
            .sessions
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        sessions.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(sessions)
    }

    async fn rename_session(
        &self,
        session_id: Uuid,
        user_id: &str,
        title: &str,
    ) -> Result<Option<ChatSession>> {
        let mut tables = self.tables.lock().await;
        let Some(session) = tables
            .sessions
            .iter_mut()
            .find(|s| s.id == session_id && s.user_id == user_id)
        else {
            return Ok(None);
        };
        self.record_write();
        session.title = title.to_string();
        session.updated_at = Utc::now();
        Ok(Some(session.clone()))
    }

    async fn touch_session(&self, session_id: Uuid) -> Result<()> {
        injected(&self.failures.touches, "touch_session")?;
        let mut tables = self.tables.lock().await;
        if let Some(session) = tables.sessions.iter_mut().find(|s| s.id == session_id) {
            self.record_write();
            session.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete_session(&self, session_id: Uuid, user_id: &str) -> Result<bool> {
        let mut tables = self.tables.lock().await;
        let before = tables.sessions.len();
        tables
            .sessions
            .retain(|s| !(s.id == session_id && s.user_id == user_id));
        if tables.sessions.len() == before {
            return Ok(false);
        }
        self.record_write();
        tables.messages.retain(|m| m.session_id != session_id);
        Ok(true)
    }

    async fn append_message(
        &self,
        session_id: Uuid,
        role: Role,
        content: &str,
    ) -> Result<ChatMessage> {
        if role == Role::Assistant {
            injected(&self.failures.assistant_messages, "append_message")?;
        }
        self.record_write();
        let message = ChatMessage::new(session_id, role, content);
        self.tables.lock().await.messages.push(message.clone());
        Ok(message)
    }

    async fn list_messages(&self, session_id: Uuid) -> Result<Vec<ChatMessage>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .messages
            .iter()
            .filter(|m| m.session_id == session_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MoodStore for MemoryStore {
    async fn insert_mood(
        &self,
        user_id: &str,
        score: MoodScore,
        notes: Option<&str>,
    ) -> Result<MoodEntry> {
        self.record_write();
        let entry = MoodEntry::new(user_id, score, notes);
        self.tables.lock().await.moods.push(entry.clone());
        Ok(entry)
    }

    async fn recent_moods(&self, user_id: &str, limit: i64) -> Result<Vec<MoodEntry>> {
        let tables = self.tables.lock().await;
        let mut entries: Vec<MoodEntry> = tables
            .moods
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(limit.max(0) as usize);
        Ok(entries)
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>> {
        let tables = self.tables.lock().await;
        Ok(tables.profiles.iter().find(|p| p.id == user_id).cloned())
    }

    async fn upsert_profile(
        &self,
        user_id: &str,
        email: Option<&str>,
        display_name: &str,
        age: i16,
    ) -> Result<Profile> {
        self.record_write();
        let now = Utc::now();
        let mut tables = self.tables.lock().await;
        if let Some(profile) = tables.profiles.iter_mut().find(|p| p.id == user_id) {
            if let Some(email) = email {
                profile.email = Some(email.to_string());
            }
            profile.display_name = display_name.to_string();
            profile.age = age;
            profile.updated_at = now;
            return Ok(profile.clone());
        }

        let profile = Profile {
            id: user_id.to_string(),
            email: email.map(str::to_string),
            display_name: display_name.to_string(),
            age,
            created_at: now,
            updated_at: now,
        };
        tables.profiles.push(profile.clone());
        Ok(profile)
    }
}

#[async_trait]
impl GratitudeStore for MemoryStore {
    async fn insert_gratitude(
        &self,
        user_id: &str,
        answers: GratitudeAnswers,
    ) -> Result<GratitudeEntry> {
        self.record_write();
        let entry = GratitudeEntry::new(user_id, answers);
        self.tables.lock().await.gratitude.push(entry.clone());
        Ok(entry)
    }

    async fn recent_gratitude(&self, user_id: &str, limit: i64) -> Result<Vec<GratitudeEntry>> {
        let tables = self.tables.lock().await;
        let mut entries: Vec<GratitudeEntry> = tables
            .gratitude
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(limit.max(0) as usize);
        Ok(entries)
    }
}
