//! Client-side signup flow for the landing page's waitlist form.
//!
//! The form is a small state machine: it starts collapsed behind a call to
//! action, opens for editing, locks while a request is in flight and ends in a
//! confirmation once the API accepts the signup. Validation here mirrors the
//! server rules so people get feedback before a round trip, but the server
//! checks everything again.

use thiserror::Error;

use crate::{
    application::{
        use_cases::waitlist::{CountInput, JoinWaitlistRequest},
        validators::{is_valid_email, missing_required_fields, non_blank},
    },
    domain::entities::platform::Platform,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Only the call to action is shown.
    Collapsed,
    Editing,
    /// Request in flight; the submit button is disabled.
    Submitting,
    /// Terminal. Shows the confirmation.
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    InstagramUsername,
    InstagramFollowers,
    YoutubeChannelName,
    YoutubeSubscribers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSection {
    Instagram,
    Youtube,
}

/// What the API said about a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Duplicate(String),
    Rejected(String),
    Failed(String),
}

impl SubmitOutcome {
    /// Interpret a `{success, message}` envelope returned by the API.
    pub fn from_response(status: u16, body: &serde_json::Value) -> Self {
        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string);

        match status {
            200 | 201 if body.get("success").and_then(|s| s.as_bool()) != Some(false) => {
                SubmitOutcome::Created
            }
            409 => SubmitOutcome::Duplicate(
                message.unwrap_or_else(|| "You're already on the waitlist.".into()),
            ),
            400..=499 => SubmitOutcome::Rejected(
                message.unwrap_or_else(|| "Please check the form and try again.".into()),
            ),
            _ => SubmitOutcome::Failed(
                message.unwrap_or_else(|| "Something went wrong. Please try again later.".into()),
            ),
        }
    }
}

/// Message shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Joined,
    Incomplete(Vec<&'static str>),
    Duplicate(String),
    Error(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("cannot {action} while the form is {state:?}")]
    InvalidTransition {
        state: FormState,
        action: &'static str,
    },

    #[error("missing or invalid fields: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),
}

/// Raw text as typed into the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupFields {
    pub name: String,
    pub email: String,
    pub phno: String,
    pub platform: Option<Platform>,
    pub instagram_username: String,
    pub instagram_followers: String,
    pub youtube_channel_name: String,
    pub youtube_subscribers: String,
}

#[derive(Debug, Clone)]
pub struct SignupForm {
    state: FormState,
    fields: SignupFields,
    feedback: Option<Feedback>,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            state: FormState::Collapsed,
            fields: SignupFields::default(),
            feedback: None,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn fields(&self) -> &SignupFields {
        &self.fields
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Submit stays disabled unless the form is being edited.
    pub fn can_submit(&self) -> bool {
        self.state == FormState::Editing
    }

    pub fn open(&mut self) -> Result<(), FormError> {
        self.expect(FormState::Collapsed, "open")?;
        self.state = FormState::Editing;
        Ok(())
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> Result<(), FormError> {
        self.expect(FormState::Editing, "edit")?;
        let value = value.into();
        let slot = match field {
            FormField::Name => &mut self.fields.name,
            FormField::Email => &mut self.fields.email,
            FormField::Phone => &mut self.fields.phno,
            FormField::InstagramUsername => &mut self.fields.instagram_username,
            FormField::InstagramFollowers => &mut self.fields.instagram_followers,
            FormField::YoutubeChannelName => &mut self.fields.youtube_channel_name,
            FormField::YoutubeSubscribers => &mut self.fields.youtube_subscribers,
        };
        *slot = value;
        Ok(())
    }

    pub fn select_platform(&mut self, platform: Platform) -> Result<(), FormError> {
        self.expect(FormState::Editing, "choose a platform")?;
        self.fields.platform = Some(platform);
        Ok(())
    }

    /// Platform-specific sections currently shown.
    pub fn visible_sections(&self) -> Vec<FormSection> {
        let Some(platform) = self.fields.platform else {
            return Vec::new();
        };
        let mut sections = Vec::new();
        if platform.includes_instagram() {
            sections.push(FormSection::Instagram);
        }
        if platform.includes_youtube() {
            sections.push(FormSection::Youtube);
        }
        sections
    }

    /// Validate and lock the form. Returns the body to POST.
    pub fn submit(&mut self) -> Result<JoinWaitlistRequest, FormError> {
        self.expect(FormState::Editing, "submit")?;

        let problems = self.client_problems();
        if !problems.is_empty() {
            self.feedback = Some(Feedback::Incomplete(problems.clone()));
            return Err(FormError::Incomplete(problems));
        }

        self.state = FormState::Submitting;
        self.feedback = None;
        Ok(self.request())
    }

    /// Apply the API's answer to an in-flight submission.
    pub fn complete(&mut self, outcome: SubmitOutcome) -> Result<(), FormError> {
        self.expect(FormState::Submitting, "complete a submission")?;

        match outcome {
            SubmitOutcome::Created => {
                self.state = FormState::Submitted;
                self.feedback = Some(Feedback::Joined);
            }
            SubmitOutcome::Duplicate(message) => {
                self.state = FormState::Editing;
                self.feedback = Some(Feedback::Duplicate(message));
            }
            SubmitOutcome::Rejected(message) | SubmitOutcome::Failed(message) => {
                self.state = FormState::Editing;
                self.feedback = Some(Feedback::Error(message));
            }
        }
        Ok(())
    }

    fn expect(&self, state: FormState, action: &'static str) -> Result<(), FormError> {
        if self.state != state {
            return Err(FormError::InvalidTransition {
                state: self.state,
                action,
            });
        }
        Ok(())
    }

    fn client_problems(&self) -> Vec<&'static str> {
        let f = &self.fields;
        let mut problems = missing_required_fields(
            Some(f.name.as_str()),
            Some(f.email.as_str()),
            f.platform,
            Some(f.instagram_username.as_str()),
            Some(f.youtube_channel_name.as_str()),
        );
        if !f.email.trim().is_empty() && !is_valid_email(&f.email) {
            problems.push("email");
        }
        if f.platform.is_none() {
            problems.push("platform");
        }
        problems
    }

    fn request(&self) -> JoinWaitlistRequest {
        let f = &self.fields;
        let sections = self.visible_sections();
        let instagram = sections.contains(&FormSection::Instagram);
        let youtube = sections.contains(&FormSection::Youtube);
        let count = |raw: &str| non_blank(Some(raw)).map(CountInput::Text);

        JoinWaitlistRequest {
            name: f.name.trim().to_string(),
            email: f.email.trim().to_string(),
            phno: non_blank(Some(f.phno.as_str())),
            platform: f.platform,
            instagram_username: instagram
                .then(|| non_blank(Some(f.instagram_username.as_str())))
                .flatten(),
            instagram_followers: instagram
                .then(|| count(&f.instagram_followers))
                .flatten(),
            youtube_channel_name: youtube
                .then(|| non_blank(Some(f.youtube_channel_name.as_str())))
                .flatten(),
            youtube_subscribers: youtube.then(|| count(&f.youtube_subscribers)).flatten(),
        }
    }
}
