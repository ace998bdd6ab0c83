//! Validation of a contact submission and the user-visible error messages

use indexmap::IndexMap;

use super::form::{ContactField, FormState};

pub const ALREADY_SUBMITTED: &str = "The form has already been submitted.";
pub const WEBSITE_INVALID: &str = "Website must be valid";
pub const SUBMIT_FAILED: &str = "Your message could not be sent. Please try again.";

/// Websites up to this many UTF-16 code units are accepted without a dot
const SHORT_WEBSITE_LEN: usize = 3;

/// What an error message is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKey {
    Field(ContactField),
    /// Form-level notice (duplicate submission, failed delivery)
    General,
}

impl ErrorKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKey::Field(field) => field.key(),
            ErrorKey::General => "error",
        }
    }
}

/// User-visible error messages, in the order they were raised
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    messages: IndexMap<ErrorKey, String>,
}

impl ErrorState {
    pub fn general(message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.insert(ErrorKey::General, message);
        errors
    }

    pub fn field(field: ContactField, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.insert(ErrorKey::Field(field), message);
        errors
    }

    pub fn insert(&mut self, key: ErrorKey, message: impl Into<String>) {
        self.messages.insert(key, message.into());
    }

    pub fn get(&self, key: ErrorKey) -> Option<&str> {
        self.messages.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: ErrorKey) -> bool {
        self.messages.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = ErrorKey> + '_ {
        self.messages.keys().copied()
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.messages.values().map(String::as_str)
    }
}

/// Check a submission before it is sent.
///
/// Missing required fields are all reported together; the website format is
/// only checked once every required field is present. The format check only
/// looks for a dot, and websites of three UTF-16 code units or fewer are let
/// through, matching how browsers measure input length.
pub fn validate(form: &FormState) -> Result<(), ErrorState> {
    let mut errors = ErrorState::default();
    for field in [ContactField::Name, ContactField::Website, ContactField::Email] {
        if form.get(field).is_empty() {
            errors.insert(
                ErrorKey::Field(field),
                format!("{} is required", field.label()),
            );
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let website = form.website.as_str();
    if !website.contains('.') && website.encode_utf16().count() > SHORT_WEBSITE_LEN {
        return Err(ErrorState::field(ContactField::Website, WEBSITE_INVALID));
    }

    Ok(())
}
