use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::{is_valid_email, missing_required_fields, non_blank, parse_count},
    domain::entities::{
        platform::{self, Platform},
        waitlist_entry::{DuplicateField, NewWaitlistEntry, WaitlistEntry},
    },
};

const MAX_TEXT_LEN: usize = 255;

#[async_trait]
pub trait WaitlistRepoTrait: Send + Sync {
    /// Any entry sharing the email, or the Instagram username when one is given.
    /// Entries matching on email must be returned ahead of handle-only matches.
    async fn find_conflict(
        &self,
        email: &str,
        instagram_username: Option<&str>,
    ) -> AppResult<Option<WaitlistEntry>>;

    /// Inserts the entry. Unique violations surface as `AppError::Duplicate`.
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry>;

    async fn count(&self) -> AppResult<i64>;
}

/// A follower/subscriber count as sent by a client: either a JSON number or
/// the text typed into the form (e.g. `"10,500"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CountInput {
    Number(serde_json::Number),
    Text(String),
}

impl CountInput {
    /// Non-negative integer value, if there is one.
    pub fn normalize(&self) -> Option<i64> {
        match self {
            CountInput::Number(n) => n.as_i64().filter(|v| *v >= 0),
            CountInput::Text(s) => parse_count(s),
        }
    }
}

/// Body of `POST /api/waitlist`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JoinWaitlistRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phno: Option<String>,
    #[serde(default, deserialize_with = "platform::deserialize_optional")]
    pub platform: Option<Platform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_followers: Option<CountInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_channel_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_subscribers: Option<CountInput>,
}

impl JoinWaitlistRequest {
    /// Trim, lower-case and parse the raw submission, then validate it.
    pub fn normalize(self) -> AppResult<NewWaitlistEntry> {
        let missing = missing_required_fields(
            Some(self.name.as_str()),
            Some(self.email.as_str()),
            self.platform,
            self.instagram_username.as_deref(),
            self.youtube_channel_name.as_deref(),
        );
        if !missing.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let email = self.email.trim().to_lowercase();
        if !is_valid_email(&email) {
            return Err(AppError::InvalidInput(
                "Please provide a valid email address".into(),
            ));
        }

        let entry = NewWaitlistEntry {
            name: self.name.trim().to_string(),
            email,
            phno: non_blank(self.phno.as_deref()),
            platform: self.platform,
            instagram_username: non_blank(self.instagram_username.as_deref()),
            instagram_followers: self.instagram_followers.as_ref().and_then(CountInput::normalize),
            youtube_channel_name: non_blank(self.youtube_channel_name.as_deref()),
            youtube_subscribers: self.youtube_subscribers.as_ref().and_then(CountInput::normalize),
        };

        let too_long = [
            ("name", Some(&entry.name)),
            ("email", Some(&entry.email)),
            ("phno", entry.phno.as_ref()),
            ("instagram_username", entry.instagram_username.as_ref()),
            ("youtube_channel_name", entry.youtube_channel_name.as_ref()),
        ]
        .into_iter()
        .find(|(_, v)| v.is_some_and(|v| v.chars().count() > MAX_TEXT_LEN));

        if let Some((field, _)) = too_long {
            return Err(AppError::InvalidInput(format!(
                "{} must be at most {} characters",
                field, MAX_TEXT_LEN
            )));
        }

        Ok(entry)
    }
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepoTrait>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepoTrait>) -> Self {
        Self { repo }
    }

    /// Add a signup to the waitlist.
    ///
    /// The lookup before the insert only exists to produce a precise message;
    /// the store's unique indexes decide which of two racing signups wins.
    #[instrument(skip(self, request), fields(email = %request.email.trim()))]
    pub async fn join(&self, request: JoinWaitlistRequest) -> AppResult<WaitlistEntry> {
        let entry = request.normalize()?;

        if let Some(existing) = self
            .repo
            .find_conflict(&entry.email, entry.instagram_username.as_deref())
            .await?
        {
            let field = DuplicateField::between(&existing, &entry);
            tracing::info!(%field, "Signup rejected by duplicate check");
            return Err(AppError::Duplicate(field));
        }

        let created = self.repo.insert(&entry).await?;
        tracing::info!(entry_id = %created.id, "Signup added to waitlist");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> AppResult<i64> {
        self.repo.count().await
    }
}
