use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{query_as, FromRow, PgPool};
use utoipa::ToSchema;

pub const MIN_AGE: i16 = 13;
pub const MAX_AGE: i16 = 25;

/// Profile row keyed by the identity provider's user id.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub email: Option<String>,
    pub display_name: String,
    pub age: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn age_is_supported(age: i64) -> bool {
        (i64::from(MIN_AGE)..=i64::from(MAX_AGE)).contains(&age)
    }

    pub async fn get(pool: &PgPool, id: &str) -> Result<Option<Self>> {
        let profile = query_as::<_, Profile>(
            r#"
            SELECT * FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(profile)
    }

    pub async fn upsert(
        pool: &PgPool,
        id: &str,
        email: Option<&str>,
        display_name: &str,
        age: i16,
    ) -> Result<Self> {
        let now = Utc::now();
        let profile = query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (id, email, display_name, age, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            ON CONFLICT (id) DO UPDATE
            SET email = COALESCE(EXCLUDED.email, profiles.email),
                display_name = EXCLUDED.display_name,
                age = EXCLUDED.age,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(email)
        .bind(display_name)
        .bind(age)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_youth_ages_are_supported() {
        assert!(!Profile::age_is_supported(12));
        assert!(Profile::age_is_supported(13));
        assert!(Profile::age_is_supported(25));
        assert!(!Profile::age_is_supported(26));
    }
}
