//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use crate::{
    application::use_cases::waitlist::{CountInput, JoinWaitlistRequest},
    domain::entities::platform::Platform,
};

/// Create a signup request that passes validation.
pub fn create_test_request(overrides: impl FnOnce(&mut JoinWaitlistRequest)) -> JoinWaitlistRequest {
    let mut request = JoinWaitlistRequest {
        name: "Test Creator".to_string(),
        email: "creator@example.com".to_string(),
        phno: Some("+91 98765 43210".to_string()),
        platform: Some(Platform::Instagram),
        instagram_username: Some("test_creator".to_string()),
        instagram_followers: Some(CountInput::Text("2,500".to_string())),
        youtube_channel_name: None,
        youtube_subscribers: None,
    };
    overrides(&mut request);
    request
}
