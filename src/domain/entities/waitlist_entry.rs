use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::platform::Platform;

/// A stored waitlist signup. Never updated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phno: Option<String>,
    pub platform: Option<Platform>,
    pub instagram_username: Option<String>,
    pub instagram_followers: Option<i64>,
    pub youtube_channel_name: Option<String>,
    pub youtube_subscribers: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Normalized signup, ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWaitlistEntry {
    pub name: String,
    pub email: String,
    pub phno: Option<String>,
    pub platform: Option<Platform>,
    pub instagram_username: Option<String>,
    pub instagram_followers: Option<i64>,
    pub youtube_channel_name: Option<String>,
    pub youtube_subscribers: Option<i64>,
}

/// The unique column a signup collided on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    Email,
    InstagramUsername,
    /// The store reported a unique violation on a constraint we do not recognise.
    Unknown,
}

impl DuplicateField {
    pub fn message(&self) -> &'static str {
        match self {
            DuplicateField::Email => "This email address is already on the waitlist.",
            DuplicateField::InstagramUsername => {
                "This Instagram username is already on the waitlist."
            }
            DuplicateField::Unknown => "Duplicate entry.",
        }
    }

    /// Attribute a collision between an existing entry and a new signup.
    /// Email wins when both columns match.
    pub fn between(existing: &WaitlistEntry, candidate: &NewWaitlistEntry) -> Self {
        if existing.email.eq_ignore_ascii_case(&candidate.email) {
            return DuplicateField::Email;
        }

        match (&existing.instagram_username, &candidate.instagram_username) {
            (Some(a), Some(b)) if a == b => DuplicateField::InstagramUsername,
            _ => DuplicateField::Unknown,
        }
    }
}

impl std::fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DuplicateField::Email => "email",
            DuplicateField::InstagramUsername => "instagram_username",
            DuplicateField::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}
