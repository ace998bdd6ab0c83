//! URL-encoding of a contact submission

use super::form::FormState;

/// Name the form backend files contact submissions under
pub const FORM_NAME: &str = "contact";

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Encode a submission as an `application/x-www-form-urlencoded` body.
///
/// The backend discriminators (`form-name` and the hidden `contact` input)
/// come first, followed by every field in submission order.
pub fn encode_submission(form: &FormState) -> String {
    let discriminators: [(&str, &str); 2] = [("form-name", FORM_NAME), ("contact", FORM_NAME)];

    discriminators
        .into_iter()
        .chain(form.entries().map(|(field, value)| (field.key(), value)))
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_still_carries_every_key() {
        assert_eq!(
            encode_submission(&FormState::default()),
            "form-name=contact&contact=contact&name=&email=&website=&phone=&comments="
        );
    }

    #[test]
    fn reserved_characters_are_percent_encoded() {
        let form = FormState {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            website: "example.com/?a=1&b=2".to_string(),
            ..FormState::default()
        };
        let body = encode_submission(&form);

        assert!(body.contains("name=Ada%20Lovelace"));
        assert!(body.contains("email=ada%40example.com"));
        assert!(body.contains("website=example.com%2F%3Fa%3D1%26b%3D2"));
        assert_eq!(body.matches('&').count(), 6);
    }
}
