use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{query_as, FromRow, PgPool};
use tracing::debug;
use utoipa::ToSchema;
use uuid::Uuid;

pub const GRATITUDE_PROMPTS: [&str; 3] = [
    "What made you smile today?",
    "Who are you grateful for and why?",
    "What's something good that happened recently?",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidGratitude {
    #[error("expected 3 answers, got {0}")]
    WrongCount(usize),
    #[error("answer {0} is empty")]
    Blank(usize),
}

/// Three trimmed, non-blank answers, one per prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GratitudeAnswers(Vec<String>);

impl GratitudeAnswers {
    pub fn new(answers: &[String]) -> Result<Self, InvalidGratitude> {
        if answers.len() != GRATITUDE_PROMPTS.len() {
            return Err(InvalidGratitude::WrongCount(answers.len()));
        }

        let mut trimmed = Vec::with_capacity(answers.len());
        for (i, answer) in answers.iter().enumerate() {
            let answer = answer.trim();
            if answer.is_empty() {
                return Err(InvalidGratitude::Blank(i + 1));
            }
            trimmed.push(answer.to_string());
        }
        Ok(GratitudeAnswers(trimmed))
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GratitudeEntry {
    pub id: Uuid,
    pub user_id: String,
    pub entries: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl GratitudeEntry {
    pub fn new(user_id: &str, answers: GratitudeAnswers) -> Self {
        GratitudeEntry {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            entries: answers.into_inner(),
            created_at: Utc::now(),
        }
    }

    pub async fn insert(pool: &PgPool, user_id: &str, answers: GratitudeAnswers) -> Result<Self> {
        let entry = GratitudeEntry::new(user_id, answers);

        let entry = query_as::<_, GratitudeEntry>(
            r#"
            INSERT INTO gratitude_entries (id, user_id, entries, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(entry.id)
        .bind(&entry.user_id)
        .bind(&entry.entries)
        .bind(entry.created_at)
        .fetch_one(pool)
        .await?;

        debug!("Gratitude entry saved: {:?}", entry.id);
        Ok(entry)
    }

    pub async fn recent(pool: &PgPool, user_id: &str, limit: i64) -> Result<Vec<Self>> {
        let entries = query_as::<_, GratitudeEntry>(
            r#"
            SELECT * FROM gratitude_entries
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn three_answers_are_trimmed() {
        let answers =
            GratitudeAnswers::new(&answers(&["  my dog ", "my sister", "passed my test"])).unwrap();
        assert_eq!(answers.into_inner(), vec!["my dog", "my sister", "passed my test"]);
    }

    #[test]
    fn blank_answer_is_rejected() {
        let err = GratitudeAnswers::new(&answers(&["sunshine", "   ", "friends"])).unwrap_err();
        assert_eq!(err, InvalidGratitude::Blank(2));
    }

    #[test]
    fn wrong_count_is_rejected() {
        let err = GratitudeAnswers::new(&answers(&["sunshine"])).unwrap_err();
        assert_eq!(err, InvalidGratitude::WrongCount(1));
        assert_eq!(err.to_string(), "expected 3 answers, got 1");
    }
}
