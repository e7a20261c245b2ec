use async_trait::async_trait;
use sqlx::Row;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepoTrait,
    domain::entities::waitlist_entry::{DuplicateField, NewWaitlistEntry, WaitlistEntry},
};

/// Unique index names from `migrations/`.
pub const EMAIL_UNIQUE_INDEX: &str = "waitlist_entries_email_key";
pub const INSTAGRAM_UNIQUE_INDEX: &str = "waitlist_entries_instagram_username_key";

const ENTRY_COLUMNS: &str = r#"
    id, name, email, phno, platform, instagram_username, instagram_followers,
    youtube_channel_name, youtube_subscribers, created_at
"#;

/// Map the constraint Postgres blamed for a unique violation to a field.
pub fn duplicate_field_for_constraint(constraint: Option<&str>) -> DuplicateField {
    match constraint {
        Some(EMAIL_UNIQUE_INDEX) => DuplicateField::Email,
        Some(INSTAGRAM_UNIQUE_INDEX) => DuplicateField::InstagramUsername,
        _ => DuplicateField::Unknown,
    }
}

fn row_to_entry(row: sqlx::postgres::PgRow) -> WaitlistEntry {
    WaitlistEntry {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        phno: row.get("phno"),
        platform: row.get("platform"),
        instagram_username: row.get("instagram_username"),
        instagram_followers: row.get("instagram_followers"),
        youtube_channel_name: row.get("youtube_channel_name"),
        youtube_subscribers: row.get("youtube_subscribers"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl WaitlistRepoTrait for PostgresPersistence {
    async fn find_conflict(
        &self,
        email: &str,
        instagram_username: Option<&str>,
    ) -> AppResult<Option<WaitlistEntry>> {
        let sql = format!(
            r#"
            SELECT {ENTRY_COLUMNS}
            FROM waitlist_entries
            WHERE lower(email) = lower($1)
               OR ($2::text IS NOT NULL AND instagram_username = $2)
            ORDER BY (lower(email) = lower($1)) DESC
            LIMIT 1
            "#
        );

        let row = sqlx::query(&sql)
            .bind(email)
            .bind(instagram_username)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(row.map(row_to_entry))
    }

    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        let sql = format!(
            r#"
            INSERT INTO waitlist_entries (
                name, email, phno, platform, instagram_username, instagram_followers,
                youtube_channel_name, youtube_subscribers
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {ENTRY_COLUMNS}
            "#
        );

        let row = sqlx::query(&sql)
            .bind(&entry.name)
            .bind(&entry.email)
            .bind(&entry.phno)
            .bind(entry.platform)
            .bind(&entry.instagram_username)
            .bind(entry.instagram_followers)
            .bind(&entry.youtube_channel_name)
            .bind(entry.youtube_subscribers)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(row_to_entry(row))
    }

    async fn count(&self) -> AppResult<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM waitlist_entries")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(row.0)
    }
}
