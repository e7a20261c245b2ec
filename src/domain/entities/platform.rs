use serde::{Deserialize, Deserializer, Serialize, de};

/// Social platform a creator publishes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "waitlist_platform", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Youtube,
    Both,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Youtube => "youtube",
            Platform::Both => "both",
        }
    }

    /// Whether signups on this platform must provide an Instagram handle.
    pub fn includes_instagram(&self) -> bool {
        matches!(self, Platform::Instagram | Platform::Both)
    }

    /// Whether signups on this platform must provide a YouTube channel.
    pub fn includes_youtube(&self) -> bool {
        matches!(self, Platform::Youtube | Platform::Both)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "instagram" => Ok(Platform::Instagram),
            "youtube" => Ok(Platform::Youtube),
            "both" => Ok(Platform::Both),
            _ => Err(format!(
                "Invalid platform: {}. Must be 'instagram', 'youtube' or 'both'",
                s
            )),
        }
    }
}

/// Deserialize an optional platform from the form's select value.
///
/// A blank string (the form's unselected state) is the same as no platform.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<Platform>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}
