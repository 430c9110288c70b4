use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{query_as, FromRow, PgPool};
use tracing::debug;
use utoipa::ToSchema;
use uuid::Uuid;

/// Number of recent entries the statistics are computed over.
pub const STATS_WINDOW: usize = 30;
/// Number of recent entries plotted on the chart.
pub const CHART_WINDOW: usize = 14;

const MOOD_LABELS: [&str; 10] = [
    "Terrible",
    "Very Bad",
    "Bad",
    "Poor",
    "Okay",
    "Good",
    "Very Good",
    "Great",
    "Excellent",
    "Amazing",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("mood score must be between 1 and 10, got {0}")]
pub struct InvalidMoodScore(pub i64);

/// A self-reported mood in `1..=10`. Only constructible through `new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodScore(i16);

impl MoodScore {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 10;

    pub fn new(score: i64) -> Result<Self, InvalidMoodScore> {
        if (Self::MIN..=Self::MAX).contains(&score) {
            Ok(MoodScore(score as i16))
        } else {
            Err(InvalidMoodScore(score))
        }
    }

    pub fn value(self) -> i16 {
        self.0
    }
}

pub fn mood_label(score: i16) -> &'static str {
    usize::try_from(score)
        .ok()
        .and_then(|score| score.checked_sub(1))
        .and_then(|index| MOOD_LABELS.get(index))
        .copied()
        .unwrap_or("Unknown")
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: Uuid,
    pub user_id: String,
    pub mood_score: i16,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MoodEntry {
    pub fn new(user_id: &str, score: MoodScore, notes: Option<&str>) -> Self {
        MoodEntry {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            mood_score: score.value(),
            notes: notes.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    pub async fn insert(
        pool: &PgPool,
        user_id: &str,
        score: MoodScore,
        notes: Option<&str>,
    ) -> Result<Self> {
        let entry = MoodEntry::new(user_id, score, notes);

        let entry = query_as::<_, MoodEntry>(
            r#"
            INSERT INTO mood_entries (id, user_id, mood_score, notes, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(entry.id)
        .bind(&entry.user_id)
        .bind(entry.mood_score)
        .bind(&entry.notes)
        .bind(entry.created_at)
        .fetch_one(pool)
        .await?;

        debug!("Mood entry saved: {:?}", entry.id);
        Ok(entry)
    }

    /// The user's latest entries, newest first
    pub async fn recent(pool: &PgPool, user_id: &str, limit: i64) -> Result<Vec<Self>> {
        let entries = query_as::<_, MoodEntry>(
            r#"
            SELECT * FROM mood_entries
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    NeedsAttention,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoodStats {
    pub total_entries: usize,
    pub average_mood: f64,
    pub this_week_entries: usize,
    pub weekly_trend: f64,
    pub trend_direction: TrendDirection,
}

impl MoodStats {
    /// Statistics over `entries` as of `now`. The caller passes the last
    /// `STATS_WINDOW` entries; nothing is stored.
    pub fn compute(entries: &[MoodEntry], now: DateTime<Utc>) -> Self {
        let week_ago = now - Duration::days(7);
        let two_weeks_ago = now - Duration::days(14);

        let this_week: Vec<i16> = entries
            .iter()
            .filter(|entry| entry.created_at >= week_ago)
            .map(|entry| entry.mood_score)
            .collect();
        let last_week: Vec<i16> = entries
            .iter()
            .filter(|entry| entry.created_at >= two_weeks_ago && entry.created_at < week_ago)
            .map(|entry| entry.mood_score)
            .collect();

        let all: Vec<i16> = entries.iter().map(|entry| entry.mood_score).collect();

        let trend = mean(&this_week) - mean(&last_week);

        MoodStats {
            total_entries: entries.len(),
            average_mood: round_one_decimal(mean(&all)),
            this_week_entries: this_week.len(),
            weekly_trend: round_one_decimal(trend),
            trend_direction: if trend >= 0.0 {
                TrendDirection::Improving
            } else {
                TrendDirection::NeedsAttention
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MoodChartPoint {
    pub date: DateTime<Utc>,
    pub mood: i16,
}

/// Chronological chart series from entries ordered newest first.
pub fn chart_points(entries: &[MoodEntry]) -> Vec<MoodChartPoint> {
    entries
        .iter()
        .take(CHART_WINDOW)
        .rev()
        .map(|entry| MoodChartPoint {
            date: entry.created_at,
            mood: entry.mood_score,
        })
        .collect()
}

fn mean(scores: &[i16]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().map(|&score| f64::from(score)).sum::<f64>() / scores.len() as f64
}

// Halves round towards positive infinity, so -0.25 becomes -0.2
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
