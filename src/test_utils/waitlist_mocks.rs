//! In-memory mock implementations of the waitlist repository.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepoTrait,
    domain::entities::waitlist_entry::{DuplicateField, NewWaitlistEntry, WaitlistEntry},
};

/// In-memory implementation of WaitlistRepoTrait for testing.
///
/// Inserts enforce the same unique rules as the Postgres indexes, under a
/// single lock, so concurrent inserts behave like the real store.
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistEntry>>,
    precheck: bool,
}

impl Default for InMemoryWaitlistRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            precheck: true,
        }
    }

    /// A repo whose duplicate lookup never finds anything, as if every
    /// competing signup landed between the lookup and the insert.
    pub fn without_precheck() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            precheck: false,
        }
    }

    /// Get all entries (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WaitlistRepoTrait for InMemoryWaitlistRepo {
    async fn find_conflict(
        &self,
        email: &str,
        instagram_username: Option<&str>,
    ) -> AppResult<Option<WaitlistEntry>> {
        if !self.precheck {
            return Ok(None);
        }

        let entries = self.entries.lock().unwrap();
        let by_email = entries.iter().find(|e| e.email.eq_ignore_ascii_case(email));
        let by_handle = || {
            instagram_username.and_then(|handle| {
                entries
                    .iter()
                    .find(|e| e.instagram_username.as_deref() == Some(handle))
            })
        };

        Ok(by_email.or_else(by_handle).cloned())
    }

    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        let mut entries = self.entries.lock().unwrap();

        if entries.iter().any(|e| e.email.eq_ignore_ascii_case(&entry.email)) {
            return Err(AppError::Duplicate(DuplicateField::Email));
        }
        if let Some(handle) = &entry.instagram_username {
            if entries
                .iter()
                .any(|e| e.instagram_username.as_ref() == Some(handle))
            {
                return Err(AppError::Duplicate(DuplicateField::InstagramUsername));
            }
        }

        let created = WaitlistEntry {
            id: Uuid::new_v4(),
            name: entry.name.clone(),
            email: entry.email.clone(),
            phno: entry.phno.clone(),
            platform: entry.platform,
            instagram_username: entry.instagram_username.clone(),
            instagram_followers: entry.instagram_followers,
            youtube_channel_name: entry.youtube_channel_name.clone(),
            youtube_subscribers: entry.youtube_subscribers,
            created_at: Utc::now(),
        };
        entries.push(created.clone());
        Ok(created)
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.entries.lock().unwrap().len() as i64)
    }
}

/// Repo that fails every call, like a store that cannot be reached.
#[derive(Default)]
pub struct UnavailableWaitlistRepo;

#[async_trait]
impl WaitlistRepoTrait for UnavailableWaitlistRepo {
    async fn find_conflict(
        &self,
        _email: &str,
        _instagram_username: Option<&str>,
    ) -> AppResult<Option<WaitlistEntry>> {
        Err(AppError::from(sqlx::Error::PoolTimedOut))
    }

    async fn insert(&self, _entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        Err(AppError::from(sqlx::Error::PoolTimedOut))
    }

    async fn count(&self) -> AppResult<i64> {
        Err(AppError::from(sqlx::Error::PoolTimedOut))
    }
}
