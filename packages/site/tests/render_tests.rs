//! Server-side rendering of the contact form, the job template and the error
//! toaster.

use dioxus::prelude::*;
use tag_site::components::{ContactForm, ErrorToaster};
use tag_site::contact::{ContactField, ErrorKey, ErrorState, ALREADY_SUBMITTED};
use tag_site::jobs::{JobContext, JobPosting, TrustedHtml};
use tag_site::pages::{JobLoading, JobTemplate};

fn posting() -> JobPosting {
    JobPosting::new(
        JobContext {
            title: "Senior Drupal Developer".to_string(),
            description: TrustedHtml::from_pipeline(
                "<p><strong>Responsibilities</strong></p><ul><li>Ship &amp; support</li></ul>",
            ),
            board_code: "2zMk3RqXyB".to_string(),
        },
        "https://thirdandgrove.applytojob.com",
    )
}

#[test]
fn job_description_is_rendered_unescaped() {
    let html = dioxus_ssr::render_element(rsx! {
        JobTemplate { posting: posting() }
    });

    assert!(html.contains(
        "<p><strong>Responsibilities</strong></p><ul><li>Ship &amp; support</li></ul>"
    ));
    assert!(!html.contains("&lt;p&gt;"));
}

#[test]
fn job_title_is_in_the_header() {
    let html = dioxus_ssr::render_element(rsx! {
        JobTemplate { posting: posting() }
    });

    assert!(html.contains("Senior Drupal Developer"));
}

#[test]
fn apply_button_opens_board_in_new_tab() {
    let html = dioxus_ssr::render_element(rsx! {
        JobTemplate { posting: posting() }
    });

    assert!(html.contains("https://thirdandgrove.applytojob.com/apply/2zMk3RqXyB"));
    assert!(html.contains("target=\"_blank\""));
    assert!(html.contains("Apply Now"));
}

#[test]
fn toaster_renders_nothing_without_errors() {
    let html = dioxus_ssr::render_element(rsx! {
        ErrorToaster {}
    });

    assert!(!html.contains("role=\"alert\""));
}

#[test]
fn toaster_joins_messages_with_dashes() {
    let mut errors = ErrorState::default();
    errors.insert(ErrorKey::Field(ContactField::Name), "Name is required");
    errors.insert(ErrorKey::Field(ContactField::Email), "Email is required");

    let html = dioxus_ssr::render_element(rsx! {
        ErrorToaster { errors: Some(errors) }
    });

    assert!(html.contains("Name is required"));
    assert!(html.contains("Email is required"));
    assert_eq!(html.matches("\u{a0}-\u{a0}").count(), 1);
}

#[test]
fn toaster_single_message_has_no_separator() {
    let html = dioxus_ssr::render_element(rsx! {
        ErrorToaster { errors: Some(ErrorState::general(ALREADY_SUBMITTED)) }
    });

    assert!(html.contains(ALREADY_SUBMITTED));
    assert!(!html.contains("\u{a0}-\u{a0}"));
}

#[test]
fn contact_form_binds_every_field() {
    let html = dioxus_ssr::render_element(rsx! {
        ContactForm {}
    });

    for name in ["name", "email", "website", "phone", "comments"] {
        assert!(
            html.contains(&format!("name=\"{name}\"")),
            "missing field {name}"
        );
    }
    assert!(html.contains("type=\"email\""));
    assert!(html.contains("type=\"tel\""));
    assert!(html.contains("placeholder=\"phone [optional]\""));
    assert!(html.contains("placeholder=\"Leave a message\""));
}

#[test]
fn contact_form_carries_backend_discriminator() {
    let html = dioxus_ssr::render_element(rsx! {
        ContactForm {}
    });

    assert!(html.contains("type=\"hidden\""));
    assert!(html.contains("value=\"contact\""));
    assert!(html.contains("data-cy=\"contactForm\""));
    assert!(html.contains("data-cy=\"messageField\""));
}

#[test]
fn fresh_contact_form_shows_send_and_no_errors() {
    let html = dioxus_ssr::render_element(rsx! {
        ContactForm {}
    });

    assert!(html.contains("type=\"submit\""));
    assert!(html.contains("send"));
    assert!(!html.contains("sending..."));
    assert!(!html.contains("role=\"alert\""));
}

#[test]
fn job_loading_is_a_status_line() {
    let html = dioxus_ssr::render_element(rsx! {
        JobLoading {}
    });

    assert!(html.contains("role=\"status\""));
    assert!(html.contains("Loading job..."));
}
