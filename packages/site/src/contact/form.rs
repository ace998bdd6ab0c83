//! Contact form fields and their live values

use serde::{Deserialize, Serialize};

/// Comment text shown in place of the message once the inquiry is sent
pub const THANK_YOU_MESSAGE: &str = "Thank you for your inquiry.";

/// A field of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Website,
    Phone,
    Comments,
}

impl ContactField {
    /// Every field, in submission order
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Website,
        ContactField::Phone,
        ContactField::Comments,
    ];

    /// Single-line inputs rendered in the grid above the message box
    pub const INPUTS: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Website,
        ContactField::Phone,
    ];

    /// Form key, used for the input `name` and the encoded body
    pub fn key(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Website => "website",
            ContactField::Phone => "phone",
            ContactField::Comments => "comments",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Website => "Website",
            ContactField::Phone => "Phone",
            ContactField::Comments => "Comments",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Website => "website",
            ContactField::Phone => "phone [optional]",
            ContactField::Comments => "Leave a message",
        }
    }

    /// HTML input type
    pub fn input_type(&self) -> &'static str {
        match self {
            ContactField::Email => "email",
            ContactField::Phone => "tel",
            _ => "text",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            ContactField::Name | ContactField::Email | ContactField::Website
        )
    }
}

/// Live values of every contact form field
///
/// All five fields are always present; an untouched field is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub website: String,
    pub phone: String,
    pub comments: String,
}

impl FormState {
    /// State shown after a successful submission
    pub fn thank_you() -> Self {
        Self {
            comments: THANK_YOU_MESSAGE.to_string(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Website => &self.website,
            ContactField::Phone => &self.phone,
            ContactField::Comments => &self.comments,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Website => &mut self.website,
            ContactField::Phone => &mut self.phone,
            ContactField::Comments => &mut self.comments,
        };
        *slot = value.into();
    }

    /// Field/value pairs in submission order
    pub fn entries(&self) -> impl Iterator<Item = (ContactField, &str)> + '_ {
        ContactField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_every_field_empty() {
        let form = FormState::default();

        assert_eq!(form.entries().count(), 5);
        assert!(form.entries().all(|(_, value)| value.is_empty()));
    }

    #[test]
    fn set_replaces_only_the_named_field() {
        let mut form = FormState::default();
        form.set(ContactField::Website, "example.com");
        form.set(ContactField::Website, "example.org");

        assert_eq!(form.get(ContactField::Website), "example.org");
        assert_eq!(form.get(ContactField::Name), "");
    }

    #[test]
    fn thank_you_clears_everything_but_comments() {
        let form = FormState::thank_you();

        assert_eq!(form.comments, THANK_YOU_MESSAGE);
        assert!(form
            .entries()
            .filter(|(field, _)| *field != ContactField::Comments)
            .all(|(_, value)| value.is_empty()));
    }

    #[test]
    fn only_name_email_and_website_are_required() {
        let required: Vec<_> = ContactField::ALL
            .into_iter()
            .filter(ContactField::is_required)
            .collect();

        assert_eq!(
            required,
            vec![ContactField::Name, ContactField::Email, ContactField::Website]
        );
    }
}
