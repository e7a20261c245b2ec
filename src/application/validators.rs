use validator::ValidateEmail;

use crate::domain::entities::platform::Platform;

/// Validates that the input looks like a valid email address
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.validate_email()
}

/// Parses a follower/subscriber count as typed by a person.
/// Thousands separators and surrounding whitespace are ignored.
/// Anything that is not a non-negative integer yields `None`.
pub fn parse_count(raw: &str) -> Option<i64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    cleaned.parse::<i64>().ok()
}

/// Trims a value, treating blank input as absent.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Names of the required fields that are missing, given the platform choice.
///
/// Shared by the signup form and the server so both apply the same rules.
pub fn missing_required_fields(
    name: Option<&str>,
    email: Option<&str>,
    platform: Option<Platform>,
    instagram_username: Option<&str>,
    youtube_channel_name: Option<&str>,
) -> Vec<&'static str> {
    let blank = |v: Option<&str>| v.map(str::trim).is_none_or(str::is_empty);

    let mut missing = Vec::new();
    if blank(name) {
        missing.push("name");
    }
    if blank(email) {
        missing.push("email");
    }
    if let Some(platform) = platform {
        if platform.includes_instagram() && blank(instagram_username) {
            missing.push("instagram_username");
        }
        if platform.includes_youtube() && blank(youtube_channel_name) {
            missing.push("youtube_channel_name");
        }
    }
    missing
}
